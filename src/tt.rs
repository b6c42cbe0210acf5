//! Transposition table for caching search results.
//!
//! Uses Zobrist hashes to store and retrieve position evaluations,
//! enabling significant search tree pruning.
//!
//! Entries live in buckets of four slots. Each slot keeps the full 64-bit
//! hash, so a lookup only hits on an exact hash match. The table has a
//! single writer: it is owned by the search state and mutated through
//! `&mut self`.

use std::mem;

use crate::board::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

/// A stored search result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub hash: u64,
    pub depth: u8,
    pub score: i32,
    pub bound_type: BoundType,
    pub best_move: Option<Move>,
    pub generation: u8,
}

impl TTEntry {
    #[must_use]
    pub fn depth(&self) -> u32 {
        u32::from(self.depth)
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }

    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }
}

/// Number of slots per bucket for collision resolution
const BUCKET_SIZE: usize = 4;

/// Generations wrap at this value when computing entry age.
const GENERATION_MASK: u8 = 0x3F;

#[derive(Clone, Copy, Default)]
struct TTBucket {
    slots: [Option<TTEntry>; BUCKET_SIZE],
}

/// Transposition table with depth- and age-aware replacement.
pub struct TranspositionTable {
    buckets: Vec<TTBucket>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let bucket_size = mem::size_of::<TTBucket>();
        let mut num_buckets = (size_mb * 1024 * 1024) / bucket_size;

        // Power of two for mask indexing
        num_buckets = num_buckets.next_power_of_two() / 2;
        if num_buckets == 0 {
            num_buckets = 1024;
        }

        TranspositionTable {
            buckets: vec![TTBucket::default(); num_buckets],
            mask: num_buckets - 1,
        }
    }

    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Number of slots in the table.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len() * BUCKET_SIZE
    }

    /// Find the entry stored for the given hash.
    #[must_use]
    pub fn lookup(&self, hash: u64) -> Option<TTEntry> {
        self.buckets[self.index(hash)]
            .slots
            .iter()
            .flatten()
            .find(|entry| entry.hash == hash)
            .copied()
    }

    /// Store an entry in the table.
    ///
    /// Uses a replacement strategy that prefers:
    /// 1. Slots with matching hash (update)
    /// 2. Empty slots
    /// 3. Slots with lowest priority, `depth * 2 - age`
    pub fn store(
        &mut self,
        hash: u64,
        depth: u32,
        score: i32,
        bound_type: BoundType,
        best_move: Option<Move>,
        generation: u16,
    ) {
        let generation = (generation as u8) & GENERATION_MASK;
        let entry = TTEntry {
            hash,
            depth: depth.min(u32::from(u8::MAX)) as u8,
            score,
            bound_type,
            best_move,
            generation,
        };
        let idx = self.index(hash);
        let bucket = &mut self.buckets[idx];

        if let Some(slot) = bucket
            .slots
            .iter_mut()
            .find(|slot| slot.is_some_and(|e| e.hash == hash))
        {
            // Keep the old move when the new result has none
            let best_move = best_move.or(slot.and_then(|e| e.best_move));
            *slot = Some(TTEntry { best_move, ..entry });
            return;
        }

        if let Some(slot) = bucket.slots.iter_mut().find(|slot| slot.is_none()) {
            *slot = Some(entry);
            return;
        }

        let mut replace_idx = 0;
        let mut worst_priority = i32::MAX;
        for (idx, slot) in bucket.slots.iter().enumerate() {
            let Some(existing) = slot else { continue };
            let age = generation.wrapping_sub(existing.generation) & GENERATION_MASK;
            let priority = i32::from(existing.depth) * 2 - i32::from(age);
            if priority < worst_priority {
                replace_idx = idx;
                worst_priority = priority;
            }
        }
        bucket.slots[replace_idx] = Some(entry);
    }

    /// Returns hash table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        // Sample first 1000 buckets
        let sample_size = self.buckets.len().min(1000);
        let occupied: usize = self
            .buckets
            .iter()
            .take(sample_size)
            .map(|bucket| bucket.slots.iter().flatten().count())
            .sum();
        let total_slots = sample_size * BUCKET_SIZE;
        ((occupied as u64 * 1000) / total_slots as u64) as u32
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.buckets.fill(TTBucket::default());
    }
}
