//! スレッド単位の確保量カウンタ
//!
//! グローバルアロケータとして登録し、呼び出しスレッドが要求した
//! バイト数と回数を数える。解放は数えない（1回の呼び出しあたりの確保量を測るため）

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

/// `count-allocations`フィーチャ無効時はカウンタが常に0のまま
pub const COUNTING_ENABLED: bool = cfg!(feature = "count-allocations");

thread_local! {
    static ALLOCATED_BYTES: Cell<u64> = const { Cell::new(0) };
    static ALLOCATION_COUNT: Cell<u64> = const { Cell::new(0) };
}

fn record(size: usize) {
    // const初期化かつDrop無しなので、try_withはスレッド終了処理中でも失敗しない
    let _ = ALLOCATED_BYTES.try_with(|bytes| bytes.set(bytes.get() + size as u64));
    let _ = ALLOCATION_COUNT.try_with(|count| count.set(count.get() + 1));
}

/// システムアロケータに委譲しつつ確保量を記録するアロケータ
pub struct CountingAllocator;

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            record(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            record(layout.size());
        }
        ptr
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            record(new_size);
        }
        new_ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
    }
}

/// ある時点での累計確保量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationSnapshot {
    bytes: u64,
    count: u64,
}

impl AllocationSnapshot {
    /// 現在のスレッドの累計値を取得
    pub fn current() -> Self {
        Self {
            bytes: ALLOCATED_BYTES.with(Cell::get),
            count: ALLOCATION_COUNT.with(Cell::get),
        }
    }

    /// このスナップショット以降に確保された量
    pub fn elapsed(&self) -> AllocationDelta {
        let now = Self::current();
        AllocationDelta {
            bytes: now.bytes.saturating_sub(self.bytes),
            count: now.count.saturating_sub(self.count),
        }
    }
}

/// 2時点間の確保量の差分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationDelta {
    pub bytes: u64,
    pub count: u64,
}

impl AllocationDelta {
    /// 1回あたりのバイト数
    pub fn bytes_per(&self, iterations: u64) -> u64 {
        if iterations == 0 {
            0
        } else {
            self.bytes / iterations
        }
    }

    /// 1回あたりの確保回数
    pub fn count_per(&self, iterations: u64) -> f64 {
        if iterations == 0 {
            0.0
        } else {
            self.count as f64 / iterations as f64
        }
    }
}
