//! BLOB columns: `SUB_TYPE 0` holds bytes, `SUB_TYPE 1` holds text.

#![allow(clippy::result_large_err)]

use sqlmodel_core::Result;

use crate::charset::Charset;

pub const SUBTYPE_BINARY: u8 = 0;
pub const SUBTYPE_TEXT: u8 = 1;

/// Subtype, segment size and (text only) charset/collation of a BLOB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobSpec {
    subtype: u8,
    pub segment_size: Option<u32>,
    charset: Option<Charset>,
    collation: Option<String>,
}

impl BlobSpec {
    pub const fn binary(segment_size: Option<u32>) -> Self {
        Self {
            subtype: SUBTYPE_BINARY,
            segment_size,
            charset: None,
            collation: None,
        }
    }

    pub fn text(
        segment_size: Option<u32>,
        charset: Option<&str>,
        collation: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            subtype: SUBTYPE_TEXT,
            segment_size,
            charset: charset.map(Charset::new).transpose()?,
            collation: collation.map(str::to_string),
        })
    }

    pub const fn subtype(&self) -> u8 {
        self.subtype
    }

    pub const fn is_text(&self) -> bool {
        self.subtype == SUBTYPE_TEXT
    }

    pub fn charset(&self) -> Option<&Charset> {
        self.charset.as_ref()
    }

    pub fn collation(&self) -> Option<&str> {
        self.collation.as_deref()
    }

    /// Set the charset of a text BLOB. Returns `false` for binary BLOBs,
    /// which have no charset and are left unchanged.
    pub fn set_charset(&mut self, name: Option<&str>) -> Result<bool> {
        if !self.is_text() {
            return Ok(false);
        }
        self.charset = name.map(Charset::new).transpose()?;
        Ok(true)
    }

    /// Set the collation of a text BLOB. Returns `false` for binary BLOBs.
    pub fn set_collation(&mut self, collation: Option<&str>) -> bool {
        if !self.is_text() {
            return false;
        }
        self.collation = collation.map(str::to_string);
        true
    }

    pub fn render(&self) -> String {
        let mut sql = String::from(if self.is_text() {
            "BLOB SUB_TYPE TEXT"
        } else {
            "BLOB SUB_TYPE BINARY"
        });
        if let Some(size) = self.segment_size {
            sql.push_str(&format!(" SEGMENT SIZE {}", size));
        }
        if let Some(cs) = &self.charset {
            sql.push_str(" CHARACTER SET ");
            sql.push_str(cs.as_str());
        }
        if let Some(collation) = &self.collation {
            sql.push_str(" COLLATE ");
            sql.push_str(collation);
        }
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtypes() {
        assert_eq!(BlobSpec::binary(None).subtype(), SUBTYPE_BINARY);
        let text = BlobSpec::text(None, None, None).unwrap();
        assert_eq!(text.subtype(), SUBTYPE_TEXT);
        assert!(text.is_text());
    }

    #[test]
    fn test_binary_blob_ignores_charset() {
        let mut blob = BlobSpec::binary(Some(80));
        assert!(!blob.set_charset(Some("UTF8")).unwrap());
        assert!(!blob.set_collation(Some("UNICODE")));
        assert!(blob.charset().is_none());
        assert_eq!(blob.render(), "BLOB SUB_TYPE BINARY SEGMENT SIZE 80");
    }

    #[test]
    fn test_text_blob_render() {
        let blob = BlobSpec::text(Some(80), Some("utf8"), Some("UNICODE_CI")).unwrap();
        assert_eq!(
            blob.render(),
            "BLOB SUB_TYPE TEXT SEGMENT SIZE 80 CHARACTER SET UTF8 COLLATE UNICODE_CI"
        );
    }
}
