use std::io::{self, Read, Seek, SeekFrom};

use crate::options::Endian;

pub struct ScriptReader<R> {
    inner: R,
    endian: Endian,
}

impl<R: Read + Seek> ScriptReader<R> {
    pub fn new(inner: R, endian: Endian) -> Self {
        Self { inner, endian }
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    pub fn read_u8(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        self.inner.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    pub fn read_u16(&mut self) -> io::Result<u16> {
        let mut buf = [0u8; 2];
        self.inner.read_exact(&mut buf)?;
        Ok(match self.endian {
            Endian::Little => u16::from_le_bytes(buf),
            Endian::Big => u16::from_be_bytes(buf),
        })
    }

    pub fn read_u32(&mut self) -> io::Result<u32> {
        let mut buf = [0u8; 4];
        self.inner.read_exact(&mut buf)?;
        Ok(match self.endian {
            Endian::Little => u32::from_le_bytes(buf),
            Endian::Big => u32::from_be_bytes(buf),
        })
    }

    pub fn read_f32(&mut self) -> io::Result<f32> {
        self.read_u32().map(f32::from_bits)
    }

    pub fn read_u16_vec(&mut self, n: usize) -> io::Result<Vec<u16>> {
        let mut result = Vec::with_capacity(n);
        for _ in 0..n {
            result.push(self.read_u16()?);
        }
        Ok(result)
    }

    pub fn read_u32_vec(&mut self, n: usize) -> io::Result<Vec<u32>> {
        let mut result = Vec::with_capacity(n);
        for _ in 0..n {
            result.push(self.read_u32()?);
        }
        Ok(result)
    }

    /// Read bytes up to a null terminator, which is consumed. Every byte maps
    /// to the `char` of the same value so the text re-encodes unchanged.
    /// Running off the end of the input is an `UnexpectedEof` error.
    pub fn read_null_terminated_string(&mut self) -> io::Result<String> {
        let mut text = String::new();
        loop {
            let b = self.read_u8()?;
            if b == 0 {
                break;
            }
            text.push(char::from(b));
        }
        Ok(text)
    }

    pub fn position(&mut self) -> io::Result<u64> {
        self.inner.stream_position()
    }

    pub fn seek_to(&mut self, pos: u64) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_follow_configured_byte_order() {
        let bytes = [0x06, 0x03, 0x08, 0x20];
        let mut le = ScriptReader::new(Cursor::new(&bytes[..]), Endian::Little);
        assert_eq!(le.read_u32().unwrap(), 0x2008_0306);
        let mut be = ScriptReader::new(Cursor::new(&bytes[..]), Endian::Big);
        assert_eq!(be.read_u16().unwrap(), 0x0603);
    }

    #[test]
    fn unterminated_string_is_an_eof_error() {
        let mut r = ScriptReader::new(Cursor::new(&b"abc"[..]), Endian::Little);
        let err = r.read_null_terminated_string().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn high_bytes_survive_as_single_chars() {
        let mut r = ScriptReader::new(Cursor::new(&[0x41, 0xE9, 0x00][..]), Endian::Little);
        let text = r.read_null_terminated_string().unwrap();
        assert_eq!(text.chars().map(|c| c as u32).collect::<Vec<_>>(), vec![0x41, 0xE9]);
    }
}
