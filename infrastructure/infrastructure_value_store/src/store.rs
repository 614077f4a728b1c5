//! Value Store Module
//!
//! Provides the slot arena mapping handles to rational values.
//!
//! Released slot indices go into a min-heap so that allocation always reuses
//! the smallest free slot before growing the table. Every slot keeps its own
//! generation, bumped on release; a handle is only accepted while its
//! generation matches the slot's. Fresh slots start at the store's epoch,
//! which a runtime carries from one store to the next.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use entities_utilities::{RationalError, RationalValue};

use crate::config::StoreConfig;
use crate::handle::{Handle, GENERATION_MASK};

/// One storage cell
#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    value: Option<RationalValue>,
}

/// Arena of rational values addressed by handles
#[derive(Debug)]
pub struct ValueStore {
    /// Slot table; its length is the high-water mark
    slots: Vec<Slot>,
    /// Indices of unoccupied slots, smallest first
    free: BinaryHeap<Reverse<u32>>,
    /// Generation of slots created by this store
    epoch: u32,
    /// Number of occupied slots
    live: usize,
    slot_limit: usize,
}

impl ValueStore {
    /// Create an empty store with default configuration
    ///
    /// # Examples
    /// ```
    /// use infrastructure_value_store::ValueStore;
    ///
    /// let store = ValueStore::new();
    /// assert_eq!(store.live_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default(), 0)
    }

    /// Create an empty store
    ///
    /// # Arguments
    /// * `config` - Sizing configuration
    /// * `epoch` - Generation of fresh slots; a runtime passes the
    ///   [`next_epoch`](Self::next_epoch) of the previous store so its
    ///   handles never match
    pub fn with_config(config: StoreConfig, epoch: u32) -> Self {
        let slot_limit = config.slot_limit();
        let mut slots = Vec::new();
        if slots.try_reserve(config.initial_capacity.min(slot_limit)).is_err() {
            log::warn!(
                "could not reserve {} initial slots, starting empty",
                config.initial_capacity
            );
        }
        Self {
            slots,
            free: BinaryHeap::new(),
            epoch: epoch & GENERATION_MASK,
            live: 0,
            slot_limit,
        }
    }

    /// Store a value and return its handle
    ///
    /// # Returns
    /// * `Ok(Handle)` - Handle of the smallest free slot, or of a new slot
    /// * `Err(RationalError::OutOfMemory)` - Slot limit reached or growth failed
    pub fn allocate(&mut self, value: RationalValue) -> Result<Handle, RationalError> {
        if let Some(Reverse(index)) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            let generation = slot.generation;
            slot.value = Some(value);
            self.live += 1;
            log::trace!("allocated rational slot {index} (reused)");
            return Ok(Handle::new(index, generation));
        }

        let index = self.slots.len();
        if index >= self.slot_limit {
            log::warn!("rational value store full at {} slots", self.slot_limit);
            return Err(RationalError::OutOfMemory);
        }
        if self.slots.len() == self.slots.capacity() {
            let additional = self.slots.capacity().max(1).min(self.slot_limit - index);
            if self.slots.try_reserve(additional).is_err() {
                log::warn!("rational value store could not grow past {index} slots");
                return Err(RationalError::OutOfMemory);
            }
            log::debug!("rational value store grew to capacity {}", self.slots.capacity());
        }

        let generation = self.epoch;
        self.slots.push(Slot {
            generation,
            value: Some(value),
        });
        self.live += 1;
        log::trace!("allocated rational slot {index}");
        Ok(Handle::new(index as u32, generation))
    }

    /// Borrow the value behind a handle
    ///
    /// # Returns
    /// * `Err(RationalError::InvalidHandle)` - Out of range, released, or stale
    pub fn get(&self, handle: Handle) -> Result<&RationalValue, RationalError> {
        match self.slots.get(handle.index()) {
            Some(Slot {
                generation,
                value: Some(value),
            }) if *generation == handle.generation() => Ok(value),
            _ => Err(RationalError::InvalidHandle),
        }
    }

    /// Release a handle, returning its slot to the free-list
    ///
    /// Releasing twice, or releasing a stale handle, is reported as
    /// `InvalidHandle` and leaves the free-list untouched.
    pub fn release(&mut self, handle: Handle) -> Result<RationalValue, RationalError> {
        let slot = self
            .slots
            .get_mut(handle.index())
            .filter(|slot| slot.generation == handle.generation())
            .ok_or(RationalError::InvalidHandle)?;
        let value = slot.value.take().ok_or(RationalError::InvalidHandle)?;
        slot.generation = slot.generation.wrapping_add(1) & GENERATION_MASK;
        self.free.push(Reverse(handle.index() as u32));
        self.live -= 1;
        log::trace!("released rational slot {}", handle.index());
        Ok(value)
    }

    /// Drop every value; all outstanding handles become invalid
    ///
    /// Returns the number of values that were still live.
    pub fn clear_all(&mut self) -> usize {
        let dropped = self.live;
        self.slots.clear();
        self.free.clear();
        self.live = 0;
        dropped
    }

    /// Number of occupied slots
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// High-water mark of the slot table
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Epoch for a store that replaces this one
    ///
    /// One past every generation this store handed out, so none of its
    /// handles match a fresh slot of the next store.
    pub fn next_epoch(&self) -> u32 {
        self.slots
            .iter()
            .map(|slot| slot.generation + 1)
            .fold(self.epoch, u32::max)
            & GENERATION_MASK
    }
}

impl Default for ValueStore {
    fn default() -> Self {
        Self::new()
    }
}
