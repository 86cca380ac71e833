use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use describe_core::{describe_struct, CyclePolicy, DescribeConfig, Describer};

/// Describer with default settings and its own registry
#[allow(dead_code)]
pub fn describer() -> Describer {
    Describer::default()
}

/// Describer that fails on pointer cycles instead of marking them
#[allow(dead_code)]
pub fn strict_describer() -> Describer {
    Describer::new(DescribeConfig::default().with_cycle_policy(CyclePolicy::Error))
}

/// In-memory sink that can be inspected after being handed to a comparator
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    #[allow(dead_code)]
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Struct with one exported and one unexported field
#[allow(non_snake_case, dead_code)]
pub struct Mixed {
    pub A: isize,
    pub a: isize,
}

describe_struct!(Mixed { pub A, a });

/// A user type nested inside others
#[allow(dead_code)]
pub struct Obj {
    pub field: isize,
}

describe_struct!(Obj as "Obj" { pub field });
