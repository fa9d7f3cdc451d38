// Frame history for replaying a run

use super::Frame;
use crate::errors::HistoryError;

/// Keeps every frame a run has emitted, up to a memory budget, so the
/// presentation layer can scrub backward and forward without touching the
/// machine.
#[derive(Debug)]
pub struct FrameHistory {
    frames: Vec<Frame>,
    max_memory: usize,
    current_memory: usize,
}

impl FrameHistory {
    pub fn new(max_memory: usize) -> Self {
        FrameHistory {
            frames: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a frame to history
    pub fn push(&mut self, frame: Frame) -> Result<(), HistoryError> {
        let frame_size = frame.estimated_size();

        if self.current_memory + frame_size > self.max_memory {
            return Err(HistoryError::LimitExceeded {
                current: self.current_memory,
                additional: frame_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += frame_size;
        self.frames.push(frame);
        Ok(())
    }

    /// Get a frame by index
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn latest(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drop every recorded frame, keeping the budget
    pub fn clear(&mut self) {
        self.frames.clear();
        self.current_memory = 0;
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
