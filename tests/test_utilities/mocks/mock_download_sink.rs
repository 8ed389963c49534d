use sbom_graph::prelude::*;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// What `trigger_save` does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveBehavior {
    Save,
    Skip,
    Fail,
    Panic,
}

/// Mock DownloadSink counting acquisitions and releases
pub struct MockDownloadSink {
    pub behavior: SaveBehavior,
    pub fail_acquire: bool,
    pub acquired: Cell<u32>,
    pub released: RefCell<Vec<u32>>,
    pub saved: RefCell<Vec<(String, Vec<u8>)>>,
    staged: RefCell<Vec<Vec<u8>>>,
}

impl MockDownloadSink {
    pub fn new(behavior: SaveBehavior) -> Self {
        Self {
            behavior,
            fail_acquire: false,
            acquired: Cell::new(0),
            released: RefCell::new(Vec::new()),
            saved: RefCell::new(Vec::new()),
            staged: RefCell::new(Vec::new()),
        }
    }

    /// Sink whose `acquire` fails before any handle exists
    pub fn failing_acquire() -> Self {
        Self {
            fail_acquire: true,
            ..Self::new(SaveBehavior::Save)
        }
    }

    /// Handles acquired but never released
    pub fn leaked(&self) -> usize {
        self.acquired.get() as usize - self.released.borrow().len()
    }
}

impl DownloadSink for MockDownloadSink {
    type Handle = u32;

    fn acquire(&self, content: &[u8], _mime_type: &str) -> Result<u32> {
        if self.fail_acquire {
            anyhow::bail!("Mock acquire failure");
        }
        let handle = self.acquired.get();
        self.acquired.set(handle + 1);
        self.staged.borrow_mut().push(content.to_vec());
        Ok(handle)
    }

    fn trigger_save(&self, handle: &u32, file_name: &str) -> Result<SaveOutcome> {
        match self.behavior {
            SaveBehavior::Save => {
                let content = self.staged.borrow()[*handle as usize].clone();
                self.saved.borrow_mut().push((file_name.to_string(), content));
                Ok(SaveOutcome::Saved(PathBuf::from(file_name)))
            }
            SaveBehavior::Skip => Ok(SaveOutcome::Skipped),
            SaveBehavior::Fail => anyhow::bail!("Mock save failure"),
            SaveBehavior::Panic => panic!("Mock save panic"),
        }
    }

    fn release(&self, handle: u32) {
        self.released.borrow_mut().push(handle);
    }
}
