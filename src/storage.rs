use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::registry::SiteRegistry;
use crate::types::Site;

pub const MAGIC: [u8; 4] = *b"MCS0";
pub const VERSION: u8 = 1;

// Header counts are untrusted until the records are actually read.
const MAX_PREALLOC: u32 = 4096;

#[derive(Serialize, Deserialize, Debug)]
pub struct Header {
    pub magic: [u8; 4],
    pub version: u8,
    pub count: u32,
}

/// Writes `sites` as a catalog file: a header followed by one record per site.
pub fn write_catalog<P: AsRef<Path>>(path: P, sites: &[Site]) -> Result<()> {
    let count = u32::try_from(sites.len()).map_err(|_| anyhow!("too many sites"))?;
    let header = Header {
        magic: MAGIC,
        version: VERSION,
        count,
    };
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, &header)?;
    for site in sites {
        bincode::serialize_into(&mut writer, site)?;
    }
    writer.flush()?;
    info!(path = %path.as_ref().display(), sites = sites.len(), "catalog written");
    Ok(())
}

pub fn read_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Site>> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);
    let header: Header = bincode::deserialize_from(&mut reader)?;
    if header.magic != MAGIC {
        return Err(anyhow!("invalid magic"));
    }
    if header.version != VERSION {
        return Err(anyhow!("unsupported version"));
    }
    let mut sites = Vec::with_capacity(header.count.min(MAX_PREALLOC) as usize);
    for _ in 0..header.count {
        match bincode::deserialize_from::<_, Site>(&mut reader) {
            Ok(site) => sites.push(site),
            Err(e) => {
                if let bincode::ErrorKind::Io(ref io_err) = *e {
                    if io_err.kind() == std::io::ErrorKind::UnexpectedEof {
                        return Err(anyhow!(
                            "truncated catalog: expected {} sites, found {}",
                            header.count,
                            sites.len()
                        ));
                    }
                }
                return Err(e.into());
            }
        }
    }
    info!(path = %path.as_ref().display(), sites = sites.len(), "catalog read");
    Ok(sites)
}

/// Reads a catalog and validates it into a registry.
pub fn load_registry<P: AsRef<Path>>(path: P) -> Result<SiteRegistry> {
    let sites = read_catalog(path)?;
    Ok(SiteRegistry::new(sites)?)
}
