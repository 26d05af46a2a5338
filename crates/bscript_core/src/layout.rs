use crate::error::ScriptError;

/// File header: version, total size, body offset, validity word.
pub const HEADER_SIZE: u32 = 0x10;
/// Body header: four u16 counts and six u32 region offsets.
pub const BODY_HEADER_SIZE: u32 = 0x20;
/// Where the command-offset table starts in every encoded file.
pub const DATA_START: u32 = HEADER_SIZE + BODY_HEADER_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u32,
    pub end: u32,
}

impl ByteRange {
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Header,
    BodyHeader,
    CommandOffsets,
    Commands,
    LabelIndices,
    ActionLabelIndices,
    Strings,
    SearchStrings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    pub id: SectionId,
    pub range: ByteRange,
}

/// Regions of an encoded script, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLayout {
    pub file_len: u32,
    pub sections: Vec<SectionLayout>,
}

impl ScriptLayout {
    /// Lay sections out back to back from offset 0, in the given order.
    pub fn from_sizes(sizes: &[(SectionId, u32)]) -> Self {
        let mut sections = Vec::with_capacity(sizes.len());
        let mut cursor = 0u32;
        for &(id, size) in sizes {
            sections.push(SectionLayout {
                id,
                range: ByteRange {
                    start: cursor,
                    end: cursor + size,
                },
            });
            cursor += size;
        }
        Self {
            file_len: cursor,
            sections,
        }
    }

    pub fn section(&self, id: SectionId) -> Option<ByteRange> {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.range)
    }

    /// Start offset of `id`, or the file length when the layout lacks it.
    pub fn start_of(&self, id: SectionId) -> u32 {
        self.section(id).map_or(self.file_len, |range| range.start)
    }

    pub fn validate(&self) -> Result<(), ScriptError> {
        let Some(first) = self.sections.first() else {
            return Err(ScriptError::corrupt(0, "layout must contain at least one section"));
        };

        if first.range.start != 0 {
            return Err(ScriptError::corrupt(
                u64::from(first.range.start),
                "layout does not start at byte 0",
            ));
        }

        let mut expected = 0u32;
        for section in &self.sections {
            if section.range.start != expected {
                return Err(ScriptError::corrupt(
                    u64::from(section.range.start),
                    format!(
                        "layout gap/overlap around section {:?}: expected start {}, got {}",
                        section.id, expected, section.range.start
                    ),
                ));
            }
            if section.range.end < section.range.start {
                return Err(ScriptError::corrupt(
                    u64::from(section.range.start),
                    format!(
                        "invalid section range {:?}: {}..{}",
                        section.id, section.range.start, section.range.end
                    ),
                ));
            }
            expected = section.range.end;
        }

        if expected != self.file_len {
            return Err(ScriptError::corrupt(
                u64::from(expected),
                format!(
                    "layout does not cover file: ended at {}, file length {}",
                    expected, self.file_len
                ),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_laid_out_back_to_back() {
        let layout = ScriptLayout::from_sizes(&[
            (SectionId::Header, HEADER_SIZE),
            (SectionId::BodyHeader, BODY_HEADER_SIZE),
            (SectionId::CommandOffsets, 8),
            (SectionId::Commands, 12),
        ]);
        assert_eq!(layout.file_len, 0x44);
        assert_eq!(layout.start_of(SectionId::CommandOffsets), DATA_START);
        assert_eq!(layout.start_of(SectionId::Commands), 0x38);
        assert_eq!(layout.start_of(SectionId::Strings), 0x44);
        layout.validate().unwrap();
    }

    #[test]
    fn validate_reports_gaps() {
        let mut layout = ScriptLayout::from_sizes(&[
            (SectionId::Header, HEADER_SIZE),
            (SectionId::BodyHeader, BODY_HEADER_SIZE),
        ]);
        layout.sections[1].range.start += 2;
        assert!(layout.validate().is_err());

        let empty = ScriptLayout {
            file_len: 0,
            sections: Vec::new(),
        };
        assert!(empty.validate().is_err());
    }
}
