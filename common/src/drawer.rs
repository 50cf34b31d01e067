use tracing::debug;

// background scroll locking
//
// the webapp implements this against the document body; lock() and unlock()
// are always called in pairs through ScrollLockGuard
pub trait ScrollLock {
    fn lock(&self);

    fn unlock(&self);
}

// holds the background scroll lock for as long as it lives
#[derive(Debug)]
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn acquire(lock: L) -> Self {
        lock.lock();
        ScrollLockGuard { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.lock.unlock();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawerState {
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    CloseControl,
    Overlay,
    Navigation,
}

// Drawer
//
// Closed -> Open on the hamburger, Open -> Closed on the close control, a click
// on the overlay, or any navigation.  the scroll lock lives inside the Open
// state, so every way out of it (including dropping the drawer) releases it
#[derive(Debug)]
pub struct Drawer<L: ScrollLock + Clone> {
    lock: L,
    guard: Option<ScrollLockGuard<L>>,
}

impl<L: ScrollLock + Clone> Drawer<L> {
    pub fn new(lock: L) -> Self {
        Drawer { lock, guard: None }
    }

    pub fn state(&self) -> DrawerState {
        match self.guard {
            Some(_) => DrawerState::Open,
            None => DrawerState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    pub fn open(&mut self) {
        if self.guard.is_none() {
            debug!("opening drawer");
            self.guard = Some(ScrollLockGuard::acquire(self.lock.clone()));
        }
    }

    // returns true if the drawer was open
    pub fn close(&mut self, reason: CloseReason) -> bool {
        match self.guard.take() {
            Some(guard) => {
                debug!(?reason, "closing drawer");
                drop(guard);
                true
            }
            None => false,
        }
    }

    // the hamburger control
    pub fn toggle(&mut self) {
        if !self.close(CloseReason::CloseControl) {
            self.open();
        }
    }
}
