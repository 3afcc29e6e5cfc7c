use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Byte encoding of the rendered output.
///
/// Characters an encoding cannot represent are replaced with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputEncoding {
    #[default]
    Utf8,
    Ascii,
    Latin1,
}

impl OutputEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            OutputEncoding::Utf8 => "utf-8",
            OutputEncoding::Ascii => "ascii",
            OutputEncoding::Latin1 => "latin-1",
        }
    }

    pub fn can_encode(&self, c: char) -> bool {
        match self {
            OutputEncoding::Utf8 => true,
            OutputEncoding::Ascii => c.is_ascii(),
            OutputEncoding::Latin1 => u32::from(c) <= 0xFF,
        }
    }

    /// The text as it reads after a round trip through this encoding.
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.chars().all(|c| self.can_encode(c)) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(
            text.chars()
                .map(|c| if self.can_encode(c) { c } else { '?' })
                .collect(),
        )
    }

    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            OutputEncoding::Utf8 => text.as_bytes().to_vec(),
            // Every char left after normalizing fits in one byte.
            OutputEncoding::Ascii | OutputEncoding::Latin1 => self
                .normalize(text)
                .chars()
                .map(|c| u32::from(c) as u8)
                .collect(),
        }
    }

    /// Whether the box-drawing connectors survive this encoding.
    pub fn supports_box_drawing(&self) -> bool {
        ['│', '├', '└', '─'].iter().all(|&c| self.can_encode(c))
    }
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEncoding(pub String);

impl fmt::Display for UnknownEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown encoding '{}' (expected utf-8, ascii or latin-1)",
            self.0
        )
    }
}

impl std::error::Error for UnknownEncoding {}

impl FromStr for OutputEncoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(OutputEncoding::Utf8),
            "ascii" | "us-ascii" => Ok(OutputEncoding::Ascii),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(OutputEncoding::Latin1),
            _ => Err(UnknownEncoding(s.to_string())),
        }
    }
}
