/// Forward-only cursor over an immutable byte buffer
///
/// Every scan either consumes what it returns or leaves the position
/// untouched, so a failed read never skips input.
#[derive(Debug, Clone)]
pub struct ByteCursor<'b> {
    buffer: &'b [u8],
    position: usize,
}

impl<'b> ByteCursor<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        ByteCursor {
            buffer,
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.buffer.len()
    }

    /// Bytes up to (not including) the next `delimiter`; the delimiter is consumed
    pub fn scan_until(&mut self, delimiter: u8) -> Option<&'b [u8]> {
        let rest = &self.buffer[self.position..];
        let len = rest.iter().position(|&byte| byte == delimiter)?;
        self.position += len + 1;
        Some(&rest[..len])
    }

    /// Exactly the next `len` bytes
    pub fn take(&mut self, len: usize) -> Option<&'b [u8]> {
        let end = self.position.checked_add(len)?;
        let slice = self.buffer.get(self.position..end)?;
        self.position = end;
        Some(slice)
    }
}
