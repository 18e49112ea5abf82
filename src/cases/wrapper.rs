//! ラッパーオブジェクト vs プリミティブのリスト比較
//!
//! 要素ごとにヒープ確保されるホルダーと、値をそのまま並べたVecで
//! 大量追加とフィルタリングのコストを比較する

use super::{FILTER_THRESHOLD, LISTS_COUNT};

/// 整数を1つだけ保持するホルダー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    pub int_val: i32,
}

impl Wrapper {
    pub fn new(int_val: i32) -> Self {
        Self { int_val }
    }
}

fn build_wrappers(init: i32) -> Vec<Box<Wrapper>> {
    let mut items = vec![Box::new(Wrapper::new(init))];
    for a in 0..LISTS_COUNT {
        items.push(Box::new(Wrapper::new(a)));
    }
    items
}

fn build_ints(init: i32) -> Vec<i32> {
    let mut items = vec![init];
    for a in 0..LISTS_COUNT {
        items.push(a);
    }
    items
}

/// IntWrapperケース
pub fn int_wrapper(init: i32) -> Vec<Box<Wrapper>> {
    let items = build_wrappers(init);

    // ホルダー自体は移すだけで、フィルタ結果の並びは新しいVecに積む
    let mut filtered = Vec::new();
    for w in items {
        if w.int_val > FILTER_THRESHOLD {
            filtered.push(w);
        }
    }
    filtered
}

/// ListOfIntsケース
pub fn list_of_ints(init: i32) -> Vec<i32> {
    let items = build_ints(init);

    items
        .iter()
        .copied()
        .filter(|&x| x > FILTER_THRESHOLD)
        .collect()
}
