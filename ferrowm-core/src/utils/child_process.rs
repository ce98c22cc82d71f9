//! Launches programs and keeps track of them until they exit.
use std::collections::HashMap;
use std::os::unix::process::CommandExt;
use std::process::{Child, Command, Stdio};
use std::sync::{atomic::AtomicBool, Arc};

pub type ChildID = u32;

/// A struct managing children processes.
#[derive(Debug, Default)]
pub struct Children {
    inner: HashMap<ChildID, Child>,
}

impl Children {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
    /// Insert a `Child` in the `Children`.
    ///
    /// # Returns
    /// - `true` if `child` is a new child-process
    /// - `false` if `child` is already known
    pub fn insert(&mut self, child: Child) -> bool {
        self.inner.insert(child.id(), child).is_none()
    }

    /// Wait on every child that already exited. Never blocks.
    pub fn remove_finished_children(&mut self) {
        self.inner
            .retain(|_, child| child.try_wait().map_or(true, |ret| ret.is_none()));
    }
}

/// Register the `SIGCHLD` signal handler. Once the signal is received,
/// the flag will be set true. User needs to manually clear the flag.
pub fn register_child_hook(flag: Arc<AtomicBool>) {
    _ = signal_hook::flag::register(signal_hook::consts::signal::SIGCHLD, flag)
        .map_err(|err| tracing::error!("Cannot register SIGCHLD signal handler: {:?}", err));
}

/// Launch `command` with `args` detached from the manager.
///
/// The child gets its own process group and no standard streams, so it neither receives our
/// terminal signals nor blocks on our pipes.
pub fn spawn(command: &str, args: &[String], children: &mut Children) -> Option<ChildID> {
    let child = Command::new(command)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .process_group(0)
        .spawn()
        .map_err(|err| tracing::warn!("Unable to launch {}: {}", command, err))
        .ok()?;
    let pid = child.id();
    children.insert(child);
    Some(pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finished_children_are_reaped() {
        let mut children = Children::new();
        let pid = spawn("true", &[], &mut children);
        assert!(pid.is_some());
        assert_eq!(children.len(), 1);
        // Poll until the child is gone, `true` exits right away.
        for _ in 0..100 {
            children.remove_finished_children();
            if children.is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(children.is_empty());
    }

    #[test]
    fn unknown_programs_are_not_tracked() {
        let mut children = Children::new();
        assert_eq!(spawn("/nonexistent/ferrowm-test", &[], &mut children), None);
        assert!(children.is_empty());
    }
}
