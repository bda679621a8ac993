//! Route-definition ingestion.
//!
//! Builds a [`Network`] from line-oriented text. Each input line defines
//! one transit line: the line name terminated by a colon, then an
//! alternating sequence of stations and costs:
//!
//! ```text
//! Central: "Epping" 2 "Theydon Bois" 3 Debden
//! ```
//!
//! Station names containing spaces are double-quoted; bare single-word
//! tokens are accepted without quotes. Each consecutive station pair
//! produces one directed edge labelled with the line, so the file above
//! yields `Epping -> Theydon Bois` (cost 2) and `Theydon Bois -> Debden`
//! (cost 3), all on Central.
//!
//! Parsing is strict: a malformed token fails the whole load with the
//! offending input line number, rather than silently truncating the route.

use std::fs;
use std::path::Path;

use crate::domain::{LineId, StationId};
use crate::network::{Network, NetworkBuilder};

/// Error from parsing a route-definition file. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The input line does not begin with `<name>:`.
    #[error("line {line}: expected a line name terminated by ':'")]
    MissingLineName { line: usize },

    /// A quoted station name has no closing quote.
    #[error("line {line}: unterminated quoted station name")]
    UnterminatedQuote { line: usize },

    /// The token in a cost position is not a non-negative integer.
    #[error("line {line}: expected a non-negative integer cost, got {token:?}")]
    InvalidCost { line: usize, token: String },

    /// A trailing cost has no station after it.
    #[error("line {line}: cost {cost} is not followed by a station")]
    DanglingCost { line: usize, cost: u32 },

    /// The file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read and parse a route-definition file into a [`Network`].
pub fn load_network(path: impl AsRef<Path>) -> Result<Network, IngestError> {
    let text = fs::read_to_string(path)?;
    parse_network(&text)
}

/// Parse route-definition text into a [`Network`].
///
/// Blank lines are skipped.
pub fn parse_network(text: &str) -> Result<Network, IngestError> {
    let mut builder = NetworkBuilder::new();
    for (idx, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        parse_route_line(raw, idx + 1, &mut builder)?;
    }
    Ok(builder.build())
}

/// Parse one `Name: station cost station ...` line into edges.
fn parse_route_line(
    raw: &str,
    line_no: usize,
    builder: &mut NetworkBuilder,
) -> Result<(), IngestError> {
    let mut scanner = Scanner::new(raw);

    let name = scanner
        .bare_token()
        .filter(|token| token.len() > 1 && token.ends_with(':'))
        .ok_or(IngestError::MissingLineName { line: line_no })?;
    let line = LineId::from(&name[..name.len() - 1]);

    // A line with a name but no stations defines no edges.
    let Some(mut from) = scanner.station(line_no)? else {
        return Ok(());
    };

    while let Some(token) = scanner.bare_token() {
        let cost: u32 = token.parse().map_err(|_| IngestError::InvalidCost {
            line: line_no,
            token: token.to_string(),
        })?;
        let Some(to) = scanner.station(line_no)? else {
            return Err(IngestError::DanglingCost {
                line: line_no,
                cost,
            });
        };
        builder.add_edge(
            StationId::from(from),
            line.clone(),
            StationId::from(to),
            cost,
        );
        from = to;
    }

    Ok(())
}

/// Whitespace-separated token scanner over one input line.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    /// Next whitespace-delimited token, quotes not interpreted.
    fn bare_token(&mut self) -> Option<&'a str> {
        self.rest = self.rest.trim_start();
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    /// Next station token: double-quoted (may contain spaces) or bare.
    fn station(&mut self, line_no: usize) -> Result<Option<&'a str>, IngestError> {
        self.rest = self.rest.trim_start();
        if self.rest.is_empty() {
            return Ok(None);
        }
        if let Some(body) = self.rest.strip_prefix('"') {
            let Some(end) = body.find('"') else {
                return Err(IngestError::UnterminatedQuote { line: line_no });
            };
            self.rest = &body[end + 1..];
            Ok(Some(&body[..end]))
        } else {
            Ok(self.bare_token())
        }
    }
}
