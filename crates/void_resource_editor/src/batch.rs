//! Batch load aggregation
//!
//! Every member load of a batch carries the batch's [`BatchId`]. Member
//! outcomes are folded into that batch's aggregator; once no member is
//! outstanding the aggregator is handed back to fire its completion
//! callback. Batches are independent of each other and of unrelated loads.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use void_resource::{Asset, BatchId, LoadAssetsCompleteCallback, UserData};

/// Accumulated results of one batch
pub struct BatchAggregator {
    on_done: LoadAssetsCompleteCallback,
    user_data: Option<UserData>,
    names: Vec<String>,
    assets: Vec<Asset>,
    duration: f32,
    remaining: usize,
    failed: usize,
    opened_on_frame: u64,
}

impl BatchAggregator {
    pub fn new(
        on_done: LoadAssetsCompleteCallback,
        user_data: Option<UserData>,
        members: usize,
        opened_on_frame: u64,
    ) -> Self {
        Self {
            on_done,
            user_data,
            names: Vec::with_capacity(members),
            assets: Vec::with_capacity(members),
            duration: 0.0,
            remaining: members,
            failed: 0,
            opened_on_frame,
        }
    }

    /// Fold in a member that loaded
    pub fn record_success(&mut self, name: &str, asset: Asset, elapsed: f32) {
        self.names.push(name.to_string());
        self.assets.push(asset);
        self.duration += elapsed;
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Fold in a member that failed; it contributes nothing to the results
    pub fn record_failure(&mut self) {
        self.failed += 1;
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Sum of member load times, in seconds
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Ready to report on `frame`
    ///
    /// A batch never completes on the frame that opened it, so an empty
    /// batch still reports one tick later like any other request.
    pub fn is_complete(&self, frame: u64) -> bool {
        self.remaining == 0 && frame > self.opened_on_frame
    }

    /// Fire the completion callback
    pub fn finish(self) {
        (self.on_done)(&self.names, &self.assets, self.duration, self.user_data.as_ref());
    }
}

/// All outstanding batches, keyed by id
#[derive(Default)]
pub struct BatchTable {
    batches: Mutex<BTreeMap<BatchId, BatchAggregator>>,
}

impl BatchTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, id: BatchId, aggregator: BatchAggregator) {
        self.batches.lock().insert(id, aggregator);
    }

    pub fn record_success(&self, id: BatchId, name: &str, asset: Asset, elapsed: f32) {
        match self.batches.lock().get_mut(&id) {
            Some(batch) => batch.record_success(name, asset, elapsed),
            None => log::warn!("Load of '{}' reported to unknown {}", name, id),
        }
    }

    pub fn record_failure(&self, id: BatchId, name: &str) {
        match self.batches.lock().get_mut(&id) {
            Some(batch) => batch.record_failure(),
            None => log::warn!("Failure of '{}' reported to unknown {}", name, id),
        }
    }

    /// Remove and return every batch ready to report, in id order
    pub fn take_complete(&self, frame: u64) -> Vec<(BatchId, BatchAggregator)> {
        let mut batches = self.batches.lock();
        let ready: Vec<BatchId> = batches
            .iter()
            .filter(|(_, batch)| batch.is_complete(frame))
            .map(|(&id, _)| id)
            .collect();

        ready
            .into_iter()
            .filter_map(|id| batches.remove(&id).map(|batch| (id, batch)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.batches.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.lock().is_empty()
    }

    /// Members still outstanding for a batch
    pub fn remaining(&self, id: BatchId) -> Option<usize> {
        self.batches.lock().get(&id).map(BatchAggregator::remaining)
    }
}
