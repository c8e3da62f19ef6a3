// crates/countrydb-core/src/loader/common_io.rs
use crate::error::{CountryDbError, Result};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// `true` if the path names a gzip file (`*.gz`).
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Open a dataset for reading, decompressing `*.gz` files on the fly.
///
/// A missing file is [`CountryDbError::SourceNotFound`]; every other open
/// failure is passed through as I/O.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CountryDbError::SourceNotFound(path.to_path_buf()),
        _ => CountryDbError::Io(e),
    })?;

    let reader = BufReader::new(file);

    if is_gzip_path(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(CountryDbError::InvalidData(
                "Gzip requested but 'compact' disabled".into(),
            ));
        }
    }

    Ok(Box::new(reader))
}

/// Write side of a dataset file. Gzip output must be finished explicitly so
/// trailer errors are not lost on drop.
pub enum Sink {
    Plain(BufWriter<File>),
    #[cfg(feature = "compact")]
    Gzip(GzEncoder<BufWriter<File>>),
}

impl Sink {
    /// Flush buffers (and the gzip trailer) down to the file.
    pub fn finish(self) -> Result<()> {
        match self {
            Sink::Plain(mut w) => w.flush()?,
            #[cfg(feature = "compact")]
            Sink::Gzip(enc) => enc.finish()?.flush()?,
        }
        Ok(())
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Plain(w) => w.write(buf),
            #[cfg(feature = "compact")]
            Sink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Plain(w) => w.flush(),
            #[cfg(feature = "compact")]
            Sink::Gzip(w) => w.flush(),
        }
    }
}

/// Create (or truncate) a dataset file for writing.
///
/// The containing directory must already exist; otherwise the call fails
/// with [`CountryDbError::DestinationUnavailable`] before touching anything.
pub fn create_stream(path: &Path) -> Result<Sink> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(CountryDbError::DestinationUnavailable(path.to_path_buf()));
        }
    }

    #[cfg(not(feature = "compact"))]
    if is_gzip_path(path) {
        return Err(CountryDbError::InvalidData(
            "Gzip requested but 'compact' disabled".into(),
        ));
    }

    let file = File::create(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CountryDbError::DestinationUnavailable(path.to_path_buf()),
        _ => CountryDbError::Io(e),
    })?;
    let writer = BufWriter::new(file);

    #[cfg(feature = "compact")]
    if is_gzip_path(path) {
        return Ok(Sink::Gzip(GzEncoder::new(writer, Compression::default())));
    }

    Ok(Sink::Plain(writer))
}
