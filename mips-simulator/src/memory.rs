use crate::error::MemoryError;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// 4KB pages
const PAGE_SIZE: usize = 4 * 1024;

/// One past the last addressable byte
const ADDRESS_SPACE_END: u64 = 1 << 32;

/// Sparse, big-endian, paged memory covering the whole 32-bit address space.
/// Pages are allocated on first write; unwritten bytes read as zero.
#[derive(Default, Clone)]
pub struct Memory {
    /// Pages indexed by first address in the page
    pages: HashMap<u32, Box<[u8; PAGE_SIZE]>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the byte at the address
    pub fn get(&self, address: u32) -> u8 {
        let page_index = self.page_index(address);
        let address_offset = self.address_offset(address);

        if let Some(page) = self.pages.get(&page_index) {
            page[address_offset]
        } else {
            0
        }
    }

    /// Get `length` bytes starting at the address. The range is clipped at
    /// the top of the address space.
    pub fn get_range(&self, address: u32, length: u32) -> Vec<u8> {
        let end = (address as u64 + length as u64).min(ADDRESS_SPACE_END);

        (address as u64..end)
            .map(|address| self.get(address as u32))
            .collect()
    }

    /// Get the word (4 bytes) at the address
    pub fn get_word(&self, address: u32) -> Result<u32, MemoryError> {
        check_alignment(address)?;
        let bytes = [
            self.get(address),
            self.get(address + 1),
            self.get(address + 2),
            self.get(address + 3),
        ];
        Ok(u32::from_be_bytes(bytes))
    }

    /// Set a byte at the address
    pub fn set(&mut self, address: u32, value: u8) {
        let page_index = self.page_index(address);
        let address_offset = self.address_offset(address);
        let page = self
            .pages
            .entry(page_index)
            .or_insert_with(|| Box::new([0; PAGE_SIZE]));

        page[address_offset] = value;
    }

    /// Set a word (4 bytes) at the address
    pub fn set_word(&mut self, address: u32, value: u32) -> Result<(), MemoryError> {
        check_alignment(address)?;

        for (i, byte) in value.to_be_bytes().iter().enumerate() {
            self.set(address + i as u32, *byte);
        }

        Ok(())
    }

    /// Load some data into memory
    pub fn load_into_memory(&mut self, data: &[u8], offset: u32) {
        for (i, byte) in data.iter().enumerate() {
            self.set(offset.wrapping_add(i as u32), *byte);
        }
    }

    /// Get the index of the page the address is in
    fn page_index(&self, address: u32) -> u32 {
        address - self.address_offset(address) as u32
    }

    /// Get the address's offset in its page
    fn address_offset(&self, address: u32) -> usize {
        address as usize % PAGE_SIZE
    }
}

/// Word accesses never cross a page since pages are word aligned
fn check_alignment(address: u32) -> Result<(), MemoryError> {
    if address % 4 != 0 {
        return Err(MemoryError::Unaligned(address));
    }

    Ok(())
}

impl Debug for Memory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Memory({} pages)", self.pages.len())
    }
}
