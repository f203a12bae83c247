//! Detector that replays recorded marker maps.

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::{DetectionLog, HeadingError, MarkerDetector, MarkerMap};

#[derive(thiserror::Error, Debug)]
pub enum ReplayError {
    #[error("detection log exhausted after {frames} frame(s)")]
    Exhausted { frames: usize },

    #[error(transparent)]
    Heading(#[from] HeadingError),
}

/// Yields one recorded marker map per [`MarkerDetector::detect`] call, in
/// order, ignoring the image it is given.
///
/// `I` is the image type of the surrounding pipeline.
pub struct ReplayDetector<I: ?Sized = ()> {
    pending: VecDeque<MarkerMap>,
    served: usize,
    _image: PhantomData<fn(&I)>,
}

impl<I: ?Sized> ReplayDetector<I> {
    pub fn new(log: DetectionLog) -> Self {
        Self {
            pending: log.into_frames().into(),
            served: 0,
            _image: PhantomData,
        }
    }

    /// Drop the next `n` recorded frames without returning them.
    pub fn skip_frames(&mut self, n: usize) {
        let n = n.min(self.pending.len());
        self.pending.drain(..n);
        self.served += n;
    }

    /// Frames not yet served.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl<I: ?Sized> MarkerDetector for ReplayDetector<I> {
    type Image = I;
    type Error = ReplayError;

    fn detect(&mut self, _image: &I) -> Result<MarkerMap, ReplayError> {
        let markers = self.pending.pop_front().ok_or(ReplayError::Exhausted {
            frames: self.served,
        })?;
        self.served += 1;
        Ok(markers)
    }
}
