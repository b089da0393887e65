//! Reads hosts from the line based input format:
//!
//! ```text
//! 2
//! Eddie Brock
//! 80
//! 30
//! false
//! Cletus Kasady
//! 95
//! 5
//! true
//! ```
//!
//! The first line is the number of hosts. Each host then takes four lines: name, compatibility,
//! stability and whether it has antibodies. Surrounding whitespace is trimmed from every line.
//!
//! The name is always the line right after the count or the previous host's antibodies flag, so
//! it may be empty. Blank lines are skipped before the count and before the numeric and boolean
//! fields. Anything after the last announced host is ignored.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::host::Host;
use crate::tree::HostTree;

/// One of the four lines describing a host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// The host's name.
    Name,
    /// The host's compatibility.
    Compatibility,
    /// The host's stability.
    Stability,
    /// Whether the host has antibodies.
    Antibodies,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Compatibility => "compatibility",
            Field::Stability => "stability",
            Field::Antibodies => "antibodies",
        })
    }
}

/// Errors from reading hosts. Line numbers start at 1.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input couldn't be read.
    #[error("failed to read hosts: {0}")]
    Io(#[from] io::Error),

    /// The input had no host count.
    #[error("missing host count")]
    MissingCount,

    /// The host count wasn't a non-negative integer.
    #[error("line {line}: invalid host count {value:?}")]
    InvalidCount {
        /// Line of the count.
        line: usize,
        /// The offending text.
        value: String,
    },

    /// The input ended before all announced hosts were read.
    #[error("unexpected end of input reading {field} of host {record}")]
    UnexpectedEof {
        /// The field that was expected next.
        field: Field,
        /// Which host (starting at 1) was being read.
        record: usize,
    },

    /// Compatibility or stability wasn't an integer.
    #[error("line {line}: invalid {field} {value:?}")]
    InvalidInteger {
        /// Either [`Field::Compatibility`] or [`Field::Stability`].
        field: Field,
        /// Line of the field.
        line: usize,
        /// The offending text.
        value: String,
    },

    /// The antibodies flag wasn't `true` or `false`.
    #[error("line {line}: invalid antibodies flag {value:?}")]
    InvalidBoolean {
        /// Line of the flag.
        line: usize,
        /// The offending text.
        value: String,
    },
}

/// Trimmed lines along with their line numbers.
struct Fields<R> {
    lines: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Fields<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>, ParseError> {
        match self.lines.next() {
            Some(text) => {
                self.line += 1;
                Ok(Some((self.line, text?.trim().to_owned())))
            }
            None => Ok(None),
        }
    }

    /// The next non-blank line.
    fn next_field(&mut self) -> Result<Option<(usize, String)>, ParseError> {
        while let Some((line, text)) = self.next_line()? {
            if !text.is_empty() {
                return Ok(Some((line, text)));
            }
        }

        Ok(None)
    }

    fn require(&mut self, field: Field, record: usize) -> Result<(usize, String), ParseError> {
        let next = match field {
            Field::Name => self.next_line()?,
            Field::Compatibility | Field::Stability | Field::Antibodies => self.next_field()?,
        };
        next.ok_or(ParseError::UnexpectedEof { field, record })
    }
}

fn parse_integer(field: Field, (line, value): (usize, String)) -> Result<i32, ParseError> {
    match value.parse() {
        Ok(n) => Ok(n),
        Err(_) => Err(ParseError::InvalidInteger { field, line, value }),
    }
}

fn parse_flag((line, value): (usize, String)) -> Result<bool, ParseError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ParseError::InvalidBoolean { line, value }),
    }
}

/// Parses hosts from `reader`. The returned hosts have no children.
///
/// # Examples
///
/// ```
/// use host_tree::parse_hosts;
///
/// let input = "1\nEddie Brock\n80\n30\nfalse\n";
/// let hosts = parse_hosts(input.as_bytes()).unwrap();
///
/// assert_eq!(hosts.len(), 1);
/// assert_eq!(hosts[0].name(), "Eddie Brock");
/// assert_eq!(hosts[0].stability(), 30);
/// ```
#[instrument(level = "trace", skip_all)]
pub fn parse_hosts<R: BufRead>(reader: R) -> Result<Vec<Host>, ParseError> {
    let mut fields = Fields::new(reader);

    let (line, value) = fields.next_field()?.ok_or(ParseError::MissingCount)?;
    let count: usize = match value.parse() {
        Ok(count) => count,
        Err(_) => return Err(ParseError::InvalidCount { line, value }),
    };

    let mut hosts = Vec::new();
    for record in 1..=count {
        let (_, name) = fields.require(Field::Name, record)?;
        let compatibility = parse_integer(
            Field::Compatibility,
            fields.require(Field::Compatibility, record)?,
        )?;
        let stability = parse_integer(
            Field::Stability,
            fields.require(Field::Stability, record)?,
        )?;
        let has_antibodies = parse_flag(fields.require(Field::Antibodies, record)?)?;

        hosts.push(Host::new(name, compatibility, stability, has_antibodies));
    }

    debug!(hosts = hosts.len(), "parsed hosts");
    Ok(hosts)
}

/// Opens the file at `path` and parses hosts from it. See [`parse_hosts`].
#[instrument(level = "trace", skip_all)]
pub fn read_hosts(path: impl AsRef<Path>) -> Result<Vec<Host>, ParseError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading hosts");
    let file = File::open(path)?;
    parse_hosts(BufReader::new(file))
}

impl HostTree {
    /// Builds a tree from the hosts in the file at `path`, inserting them in file order.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        Ok(read_hosts(path)?.into_iter().collect())
    }
}
