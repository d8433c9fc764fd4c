//! Defines the [SignaturePresetStore] struct, a capacity-bounded, insertion-ordered
//! collection of [SignatureRecord] objects with first-in, first-out eviction.

use crate::config::MAX_DEFAULT_SIGNATURES;
use crate::error::PresetError;
use crate::preset::record::SignatureRecord;
use log::debug;
use std::ops::Range;
use std::slice::Iter;

/// The zero-based index of a single [SignatureRecord] inside its containing
/// [SignaturePresetStore].
pub type PresetIndex = usize;

/// The saved signature presets, oldest first.
///
/// The number of records never exceeds the store's capacity once any operation
/// completes. Adding to a full store removes the record at index 0 first.
#[derive(Debug, Clone)]
pub struct SignaturePresetStore {
    records: Vec<SignatureRecord>,
    capacity: usize,
}

impl SignaturePresetStore {
    /// Creates a new, empty [SignaturePresetStore] holding at most
    /// [MAX_DEFAULT_SIGNATURES] records.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(MAX_DEFAULT_SIGNATURES)
    }

    /// Creates a new, empty [SignaturePresetStore] holding at most `capacity` records.
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        SignaturePresetStore {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the maximum number of records this [SignaturePresetStore] holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of records in this [SignaturePresetStore].
    #[inline]
    pub fn len(&self) -> PresetIndex {
        self.records.len()
    }

    /// Returns `true` if this [SignaturePresetStore] holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if the next call to [SignaturePresetStore::add()] will evict
    /// the oldest record.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.records.len() >= self.capacity
    }

    /// Returns a Range from `0..(number of records)` for this [SignaturePresetStore].
    #[inline]
    pub fn as_range(&self) -> Range<PresetIndex> {
        0..self.len()
    }

    /// Returns the [SignatureRecord] at the given index.
    pub fn get(&self, index: PresetIndex) -> Result<&SignatureRecord, PresetError> {
        self.records
            .get(index)
            .ok_or(PresetError::PresetIndexOutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// Returns the oldest [SignatureRecord] in this [SignaturePresetStore].
    #[inline]
    pub fn first(&self) -> Result<&SignatureRecord, PresetError> {
        self.records.first().ok_or(PresetError::NoPresetsInStore)
    }

    /// Returns the most recently added [SignatureRecord] in this [SignaturePresetStore].
    #[inline]
    pub fn last(&self) -> Result<&SignatureRecord, PresetError> {
        self.records.last().ok_or(PresetError::NoPresetsInStore)
    }

    /// Returns an iterator over the records in this [SignaturePresetStore], oldest first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, SignatureRecord> {
        self.records.iter()
    }

    /// Appends the given record. If the store is full, the oldest record is removed
    /// first and returned.
    pub fn add(&mut self, record: SignatureRecord) -> Option<SignatureRecord> {
        let evicted = if self.is_full() {
            Some(self.records.remove(0))
        } else {
            None
        };

        if evicted.is_some() {
            debug!(
                "signature preset store full at {} records, evicted oldest preset",
                self.capacity
            );
        }

        self.records.push(record);

        debug_assert!(self.records.len() <= self.capacity);

        evicted
    }

    /// Removes and returns the record at the given index, shifting later records
    /// down by one.
    pub fn remove(&mut self, index: PresetIndex) -> Result<SignatureRecord, PresetError> {
        if index >= self.len() {
            return Err(PresetError::PresetIndexOutOfBounds {
                index,
                len: self.len(),
            });
        }

        Ok(self.records.remove(index))
    }

    /// Replaces every record in this [SignaturePresetStore] in a single assignment.
    ///
    /// Readers observe either the previous sequence or the new one, never a mixture.
    /// Records beyond the store's capacity are dropped from the front, oldest first.
    pub fn replace_all(&mut self, mut records: Vec<SignatureRecord>) {
        if records.len() > self.capacity {
            let excess = records.len() - self.capacity;

            records.drain(..excess);
        }

        self.records = records;
    }
}

impl Default for SignaturePresetStore {
    #[inline]
    fn default() -> Self {
        SignaturePresetStore::new()
    }
}

impl<'a> IntoIterator for &'a SignaturePresetStore {
    type Item = &'a SignatureRecord;

    type IntoIter = Iter<'a, SignatureRecord>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
