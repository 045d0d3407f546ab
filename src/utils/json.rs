use crate::utils::error::{ConfigError, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;

/// Pretty printer with 4-space indentation that escapes every non-ASCII
/// code point as `\uXXXX` (UTF-16 surrogate pairs above the BMP).
pub struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl AsciiPrettyFormatter<'_> {
    pub fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"    "),
        }
    }
}

impl Default for AsciiPrettyFormatter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serializes to 4-space indented, ASCII-only JSON text.
pub fn to_ascii_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::new());
    value.serialize(&mut serializer)?;
    // 輸出僅含 ASCII
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parses JSON text, tagging malformed input with the `text` field.
pub fn parse_json_text(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|source| ConfigError::Json {
        field: "text".to_string(),
        text: text.to_string(),
        source,
    })
}

/// Writes `value` as ASCII-safe JSON, creating parent directories as needed.
///
/// Fails with [`ConfigError::IsADirectory`] before touching the disk when
/// something other than a regular file already occupies `file`.
pub fn save_json<T: Serialize + ?Sized>(file: &Path, value: &T) -> Result<()> {
    if file.exists() && !file.is_file() {
        return Err(ConfigError::IsADirectory {
            file: file.to_path_buf(),
        });
    }

    if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let text = to_ascii_json(value)?;
    fs::write(file, text)?;
    Ok(())
}

/// Reads a JSON data file as text, decoding invalid UTF-8 lossily.
pub fn read_json_text(file: &Path) -> Result<String> {
    if !file.exists() {
        return Err(ConfigError::NotFound {
            file: file.to_path_buf(),
        });
    }

    if !file.is_file() {
        return Err(ConfigError::IsADirectory {
            file: file.to_path_buf(),
        });
    }

    let data = fs::read(file)?;
    Ok(String::from_utf8_lossy(&data).into_owned())
}
