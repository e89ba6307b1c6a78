#![allow(dead_code)]

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tar::{Builder, EntryType, Header};

/// Build a tar.gz at `dir/name` with regular files (`Some(size)`) and
/// directories (`None`), in the given order.
pub fn targz(dir: &Path, name: &str, members: &[(&str, Option<u64>)]) -> PathBuf {
    let path = dir.join(name);
    let encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::fast());
    let mut builder = Builder::new(encoder);

    for (member, size) in members {
        let mut header = Header::new_gnu();
        match size {
            Some(size) => {
                header.set_entry_type(EntryType::Regular);
                header.set_size(*size);
                header.set_mode(0o644);
                builder
                    .append_data(&mut header, member, noise(*size).as_slice())
                    .unwrap();
            }
            None => {
                header.set_entry_type(EntryType::Directory);
                header.set_size(0);
                header.set_mode(0o755);
                builder.append_data(&mut header, member, io::empty()).unwrap();
            }
        }
    }

    builder.into_inner().unwrap().finish().unwrap();
    path
}

/// Incompressible filler so truncating the gzip stream cuts into file data.
fn noise(len: u64) -> Vec<u8> {
    let mut state: u32 = 0x9e37_79b9;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state as u8
        })
        .collect()
}
