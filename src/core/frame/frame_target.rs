use std::cell::UnsafeCell;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use crate::core::data::pixel_size::PixelSize;

pub const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameTargetError {
    InvalidSize { width: i32, height: i32 },
}

impl fmt::Display for FrameTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "frame target size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for FrameTargetError {}

#[inline]
fn pack(frame_id: u64, front_slot: usize) -> u64 {
    (frame_id << 1) | (front_slot as u64 & 1)
}

#[inline]
fn front_slot_of(published: u64) -> usize {
    (published & 1) as usize
}

#[inline]
fn frame_id_of(published: u64) -> u64 {
    published >> 1
}

/// Two equally sized pixel slots and one atomic word,
/// `published = (frame_id << 1) | front_slot`.
///
/// The front slot never changes while it is front. A single writer renders
/// into the other slot through [`BackBuffer`] and promotes it with one
/// compare-and-swap on `published`. Readers pin the slot they look at with
/// [`FrameSnapshot`]; the writer will not take a back slot that is still
/// pinned, so a snapshot can never observe a partially written frame.
pub struct FrameTarget {
    slots: [UnsafeCell<Box<[u32]>>; 2],
    readers: [AtomicUsize; 2],
    writer_active: AtomicBool,
    published: AtomicU64,
    size: PixelSize,
}

// SAFETY: slot memory is only reached through `FrameSnapshot` (shared, after
// pinning a slot that is front) and `BackBuffer` (exclusive, guarded by
// `writer_active` and only for the non-front slot with no pinned readers).
unsafe impl Sync for FrameTarget {}

impl FrameTarget {
    pub fn new(size: PixelSize) -> Result<Self, FrameTargetError> {
        let Some(len) = size.pixel_count() else {
            return Err(FrameTargetError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        };

        Ok(Self {
            slots: [
                UnsafeCell::new(vec![0; len].into_boxed_slice()),
                UnsafeCell::new(vec![0; len].into_boxed_slice()),
            ],
            readers: [AtomicUsize::new(0), AtomicUsize::new(0)],
            writer_active: AtomicBool::new(false),
            published: AtomicU64::new(pack(0, 0)),
            size,
        })
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Bytes per row. Rows are tightly packed.
    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.size.width as usize * BYTES_PER_PIXEL
    }

    /// Id of the frame currently front. `0` until the first publish.
    #[must_use]
    pub fn frame_id(&self) -> u64 {
        frame_id_of(self.published.load(Ordering::SeqCst))
    }

    /// Pins and returns the current front slot.
    ///
    /// Lock-free: it only retries if a publish lands between reading the
    /// published word and pinning the slot.
    pub fn front_snapshot(&self) -> FrameSnapshot<'_> {
        loop {
            let published = self.published.load(Ordering::SeqCst);
            let slot = front_slot_of(published);

            self.readers[slot].fetch_add(1, Ordering::SeqCst);

            let confirmed = self.published.load(Ordering::SeqCst);
            if front_slot_of(confirmed) == slot {
                return FrameSnapshot {
                    target: self,
                    slot,
                    frame_id: frame_id_of(confirmed),
                };
            }

            self.readers[slot].fetch_sub(1, Ordering::SeqCst);
            std::hint::spin_loop();
        }
    }

    /// Claims the non-front slot for rendering.
    ///
    /// Returns `None` if another [`BackBuffer`] is alive or a reader still
    /// pins the would-be back slot from before the last publish.
    pub fn back_for_render(&self) -> Option<BackBuffer<'_>> {
        if self
            .writer_active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return None;
        }

        let published = self.published.load(Ordering::SeqCst);
        let slot = 1 - front_slot_of(published);

        if self.readers[slot].load(Ordering::SeqCst) != 0 {
            self.writer_active.store(false, Ordering::SeqCst);
            return None;
        }

        Some(BackBuffer {
            target: self,
            slot,
            published_at_start: published,
        })
    }

    /// Flips the front slot and bumps the frame id, but only if nobody
    /// published since `published_at_start` was observed.
    fn try_publish(&self, published_at_start: u64) -> Option<u64> {
        let frame_id = frame_id_of(published_at_start) + 1;
        let next = pack(frame_id, 1 - front_slot_of(published_at_start));

        self.published
            .compare_exchange(published_at_start, next, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| frame_id)
    }

    #[cfg(test)]
    fn pinned_readers(&self, slot: usize) -> usize {
        self.readers[slot].load(Ordering::SeqCst)
    }
}

impl fmt::Debug for FrameTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let published = self.published.load(Ordering::SeqCst);

        f.debug_struct("FrameTarget")
            .field("size", &self.size)
            .field("frame_id", &frame_id_of(published))
            .field("front_slot", &front_slot_of(published))
            .finish_non_exhaustive()
    }
}

/// A pinned view of the front slot at the time it was taken.
///
/// Holding a snapshot across several publishes is safe but stalls the
/// producer once the pinned slot comes round as the back slot again.
pub struct FrameSnapshot<'a> {
    target: &'a FrameTarget,
    slot: usize,
    frame_id: u64,
}

impl FrameSnapshot<'_> {
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        // SAFETY: this slot is pinned and was front when pinned; the writer
        // never claims a pinned slot, so nothing mutates it while we borrow.
        unsafe { &*self.target.slots[self.slot].get() }
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.target.width()
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.target.height()
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.target.row_stride()
    }

    #[must_use]
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }
}

impl Drop for FrameSnapshot<'_> {
    fn drop(&mut self) {
        self.target.readers[self.slot].fetch_sub(1, Ordering::SeqCst);
    }
}

impl fmt::Debug for FrameSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameSnapshot")
            .field("slot", &self.slot)
            .field("frame_id", &self.frame_id)
            .field("size", &self.target.size)
            .finish()
    }
}

/// Exclusive access to the back slot. Dropping it without publishing
/// discards whatever was rendered.
pub struct BackBuffer<'a> {
    target: &'a FrameTarget,
    slot: usize,
    published_at_start: u64,
}

impl BackBuffer<'_> {
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        // SAFETY: `writer_active` makes this the only BackBuffer, the slot is
        // not front, and it had no pinned readers when claimed. Readers only
        // keep a pin on a slot that is front, so none can appear until we
        // publish, which consumes `self`.
        unsafe { &mut *self.target.slots[self.slot].get() }
    }

    #[must_use]
    pub fn published_at_start(&self) -> u64 {
        self.published_at_start
    }

    /// Promotes this slot to front. Returns the new frame id, or `None` if
    /// another publish happened since this buffer was claimed.
    pub fn publish(self) -> Option<u64> {
        self.target.try_publish(self.published_at_start)
    }
}

impl Drop for BackBuffer<'_> {
    fn drop(&mut self) {
        self.target.writer_active.store(false, Ordering::SeqCst);
    }
}

impl fmt::Debug for BackBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackBuffer")
            .field("slot", &self.slot)
            .field("published_at_start", &self.published_at_start)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::thread;

    fn target(width: i32, height: i32) -> FrameTarget {
        FrameTarget::new(PixelSize::new(width, height)).unwrap()
    }

    fn render_and_publish(target: &FrameTarget, value: u32) -> Option<u64> {
        let mut back = target.back_for_render()?;
        back.pixels_mut().fill(value);
        back.publish()
    }

    #[test]
    fn test_new_rejects_invalid_size() {
        assert_eq!(
            FrameTarget::new(PixelSize::new(0, 10)).unwrap_err(),
            FrameTargetError::InvalidSize {
                width: 0,
                height: 10
            }
        );
    }

    #[test]
    fn test_fresh_target_starts_at_frame_zero() {
        let target = target(4, 3);
        let snapshot = target.front_snapshot();

        assert_eq!(snapshot.frame_id(), 0);
        assert_eq!(snapshot.width(), 4);
        assert_eq!(snapshot.height(), 3);
        assert_eq!(snapshot.row_stride(), 16);
        assert_eq!(snapshot.pixels().len(), 12);
    }

    #[test]
    fn test_publish_promotes_back_slot_and_bumps_frame_id() {
        let target = target(2, 2);

        assert_eq!(render_and_publish(&target, 0xff00_00ff), Some(1));

        let snapshot = target.front_snapshot();
        assert_eq!(snapshot.frame_id(), 1);
        assert!(snapshot.pixels().iter().all(|&c| c == 0xff00_00ff));
    }

    #[test]
    fn test_back_buffer_alternates_slots() {
        let target = target(2, 2);

        let back = target.back_for_render().unwrap();
        assert_eq!(back.published_at_start(), pack(0, 0));
        assert_eq!(back.publish(), Some(1));

        let back = target.back_for_render().unwrap();
        assert_eq!(back.published_at_start(), pack(1, 1));
        assert_eq!(back.publish(), Some(2));

        assert_eq!(target.front_snapshot().frame_id(), 2);
    }

    #[test]
    fn test_dropped_back_buffer_does_not_publish() {
        let target = target(2, 2);

        {
            let mut back = target.back_for_render().unwrap();
            back.pixels_mut().fill(9);
        }

        let snapshot = target.front_snapshot();
        assert_eq!(snapshot.frame_id(), 0);
        assert!(snapshot.pixels().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_only_one_writer_at_a_time() {
        let target = target(2, 2);

        let first = target.back_for_render().unwrap();
        assert!(target.back_for_render().is_none());

        drop(first);
        assert!(target.back_for_render().is_some());
    }

    #[test]
    fn test_stale_publish_is_rejected() {
        let target = target(2, 2);

        let stale = pack(0, 0);
        assert_eq!(target.try_publish(stale), Some(1));
        assert_eq!(target.try_publish(stale), None);
        assert_eq!(target.frame_id(), 1);
    }

    #[test]
    fn test_pinned_front_blocks_writer_once_it_becomes_back() {
        let target = target(2, 2);
        render_and_publish(&target, 1).unwrap();

        let held = target.front_snapshot();
        assert_eq!(held.frame_id(), 1);

        // Slot 0 is back and unpinned, so this publish goes through.
        assert_eq!(render_and_publish(&target, 2), Some(2));

        // Now the held slot would be the back slot.
        assert!(target.back_for_render().is_none());
        assert!(held.pixels().iter().all(|&c| c == 1));

        drop(held);
        assert_eq!(render_and_publish(&target, 3), Some(3));
    }

    #[test]
    fn test_snapshot_drop_unpins_slot() {
        let target = target(2, 2);

        let snapshot = target.front_snapshot();
        assert_eq!(target.pinned_readers(0), 1);

        drop(snapshot);
        assert_eq!(target.pinned_readers(0), 0);
    }

    #[test]
    fn test_concurrent_readers_never_see_torn_or_regressing_frames() {
        const FRAMES: u64 = 2_000;

        let target = Arc::new(target(16, 16));
        let done = Arc::new(AtomicBool::new(false));

        let readers: Vec<_> = (0..3)
            .map(|_| {
                let target = Arc::clone(&target);
                let done = Arc::clone(&done);

                thread::spawn(move || {
                    let mut last_seen = 0;
                    while !done.load(Ordering::SeqCst) {
                        let snapshot = target.front_snapshot();
                        let frame_id = snapshot.frame_id();

                        assert!(
                            frame_id >= last_seen,
                            "frame id went from {} to {}",
                            last_seen,
                            frame_id
                        );
                        assert!(
                            snapshot.pixels().iter().all(|&c| u64::from(c) == frame_id),
                            "frame {} contains pixels from another frame",
                            frame_id
                        );
                        last_seen = frame_id;
                    }
                })
            })
            .collect();

        let mut published = 0;
        while published < FRAMES {
            let Some(mut back) = target.back_for_render() else {
                thread::yield_now();
                continue;
            };

            let next_id = frame_id_of(back.published_at_start()) + 1;
            back.pixels_mut().fill(next_id as u32);

            if let Some(frame_id) = back.publish() {
                assert_eq!(frame_id, next_id);
                published = frame_id;
            }
        }

        done.store(true, Ordering::SeqCst);
        for reader in readers {
            reader.join().unwrap();
        }

        assert_eq!(target.frame_id(), FRAMES);
    }
}
