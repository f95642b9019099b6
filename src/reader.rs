use flate2::read::MultiGzDecoder;
use std::{
    ffi::OsStr,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

pub fn is_compressed<P: AsRef<Path>>(p: &P) -> bool {
    p.as_ref().extension() == Some(OsStr::new("gz"))
}

/// Opens `p` for line reading; `-` is stdin and `.gz` files are decompressed.
pub fn read_with_gz<P: AsRef<Path>>(p: &P) -> io::Result<Box<dyn BufRead>> {
    if p.as_ref() == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }

    let file = File::open(p)?;
    if is_compressed(p) {
        debug!("reading gzip input {}", p.as_ref().display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionLine {
    /// 1-indexed position in the source
    pub line: usize,
    pub text: String,
}

impl ExpressionLine {
    pub fn new<S: ToString>(line: usize, text: S) -> Self {
        Self {
            line,
            text: text.to_string(),
        }
    }
}

/// Reads one expression per line, skipping blank and comment lines.
#[must_use]
pub struct ExpressionReader<R: BufRead> {
    reader: R,
    comment: char,
}

impl<R: BufRead> ExpressionReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            comment: '#',
        }
    }

    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = comment;
        self
    }

    pub fn finish(self) -> io::Result<Vec<ExpressionLine>> {
        let mut lines = Vec::new();

        for (i, line) in self.reader.lines().enumerate() {
            let line = line?;
            let text = line.trim();

            if text.is_empty() || text.starts_with(self.comment) {
                continue;
            }

            lines.push(ExpressionLine::new(i + 1, text));
        }

        debug!("read {} expression(s)", lines.len());
        Ok(lines)
    }
}
