use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use stat_roller::core::{roll_stat_sheet, RollConfig, StdRoller};
use stat_roller::term::{FrameBuffer, SheetView, Viewport};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn sheet_view_render_is_allocation_free_after_warmup() {
    let view = SheetView::default();
    let viewport = Viewport::new(80, 40);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut roller = StdRoller::from_seed(5);
    let sheet = roll_stat_sheet(&RollConfig::default(), &mut roller).unwrap();

    // Warm-up (resize/initial clears).
    view.render_into(&sheet, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            view.render_into(&sheet, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
