//! Archive builders shared by the unit tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use tar::{Builder, EntryType, Header};

pub(crate) enum Member<'a> {
    File(&'a str, u64),
    Dir(&'a str),
    /// Directory whose header declares a non-zero size
    SizedDir(&'a str, u64),
    Symlink(&'a str, &'a str),
    /// Pre-POSIX directory: NUL type flag and a trailing slash
    OldStyleDir(&'a str),
}

pub(crate) fn write_targz(path: &Path, members: &[Member<'_>]) {
    let encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    let mut builder = Builder::new(encoder);

    for member in members {
        match member {
            Member::File(name, size) => {
                let mut header = header(EntryType::Regular, *size);
                let data: Vec<u8> = (0..*size).map(|i| (i % 251) as u8).collect();
                builder.append_data(&mut header, name, data.as_slice()).unwrap();
            }
            Member::Dir(name) => {
                let mut header = header(EntryType::Directory, 0);
                builder.append_data(&mut header, name, io::empty()).unwrap();
            }
            Member::SizedDir(name, size) => {
                let mut header = header(EntryType::Directory, *size);
                let data = vec![b'x'; *size as usize];
                builder.append_data(&mut header, name, data.as_slice()).unwrap();
            }
            Member::Symlink(name, target) => {
                let mut header = header(EntryType::Symlink, 0);
                header.set_link_name(target).unwrap();
                builder.append_data(&mut header, name, io::empty()).unwrap();
            }
            Member::OldStyleDir(name) => {
                let mut header = Header::new_old();
                header.set_size(0);
                header.set_mode(0o755);
                let raw = header.as_old_mut();
                raw.name[..name.len()].copy_from_slice(name.as_bytes());
                raw.linkflag[0] = 0;
                header.set_cksum();
                builder.append(&header, io::empty()).unwrap();
            }
        }
    }

    builder.into_inner().unwrap().finish().unwrap();
}

pub(crate) fn write_raw_gzip(path: &Path, payload: &[u8]) {
    let mut encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    encoder.write_all(payload).unwrap();
    encoder.finish().unwrap();
}

fn header(kind: EntryType, size: u64) -> Header {
    let mut header = Header::new_gnu();
    header.set_entry_type(kind);
    header.set_size(size);
    header.set_mode(if kind == EntryType::Directory { 0o755 } else { 0o644 });
    header
}
