//! Directory-backed patch storage for hosts.

extern crate std;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::PatchStorage;

/// Patch `n` lives in the file `<dir>/<n>`.
///
/// Subdirectories and files whose name is not a patch number are ignored.
#[derive(Debug, Clone)]
pub struct DirStorage {
    dir: PathBuf,
}

impl DirStorage {
    /// Use `dir` as the patch directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, number: u16) -> PathBuf {
        self.dir.join(std::format!("{}", number))
    }
}

impl PatchStorage for DirStorage {
    type Error = io::Error;

    fn list(&mut self, found: &mut dyn FnMut(u16)) -> io::Result<()> {
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let number = entry
                .file_name()
                .to_str()
                .and_then(|name| name.parse::<u16>().ok());
            if let Some(n) = number {
                found(n);
            }
        }
        Ok(())
    }

    fn exists(&mut self, number: u16) -> io::Result<bool> {
        Ok(self.path(number).is_file())
    }

    fn read(&mut self, number: u16, buf: &mut [u8]) -> io::Result<Option<usize>> {
        let mut file = match fs::File::open(self.path(number)) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let mut len = 0;
        while len < buf.len() {
            match file.read(&mut buf[len..])? {
                0 => break,
                n => len += n,
            }
        }
        Ok(Some(len))
    }

    fn write(&mut self, number: u16, data: &[u8]) -> io::Result<()> {
        fs::write(self.path(number), data)
    }

    fn remove(&mut self, number: u16) -> io::Result<()> {
        match fs::remove_file(self.path(number)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}
