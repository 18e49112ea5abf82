//! 遅延シーケンス vs 実体化済みリスト
//!
//! `IntSequence` はプル型・単方向・一度きりのジェネレータで、
//! 要求されるまで値を生成しない

use super::{FILTER_THRESHOLD, LISTS_COUNT};
use std::iter::FusedIterator;

/// 先頭に`init`、続けて`0..LISTS_COUNT`を順に生成するジェネレータ
///
/// 使い切ったら再開できない。新しい列が必要な場合は`get_ints`を再度呼ぶ。
/// 残り要素数は公開しないので、`collect`は伸長しながら実体化する
#[derive(Debug)]
pub struct IntSequence {
    seed: Option<i32>,
    next: i32,
    end: i32,
}

impl IntSequence {
    fn new(init: i32) -> Self {
        Self {
            seed: Some(init),
            next: 0,
            end: LISTS_COUNT,
        }
    }
}

impl Iterator for IntSequence {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if let Some(seed) = self.seed.take() {
            return Some(seed);
        }
        if self.next < self.end {
            let value = self.next;
            self.next += 1;
            Some(value)
        } else {
            None
        }
    }
}

impl FusedIterator for IntSequence {}

/// 遅延生成の整数列を返す
pub fn get_ints(init: i32) -> IntSequence {
    IntSequence::new(init)
}

/// 同じ整数列を一括で構築して返す
pub fn get_ints_eager(init: i32) -> Vec<i32> {
    let mut items = vec![init];
    for a in 0..LISTS_COUNT {
        items.push(a);
    }
    items
}

/// GetIntsFromIEnumerableケース
///
/// ジェネレータを消費側で実体化してからフィルタする
pub fn get_ints_from_ienumerable(init: i32) -> Vec<i32> {
    let materialized: Vec<i32> = get_ints(init).collect();
    filter_above_threshold(&materialized)
}

/// GetIntsFromListケース
pub fn get_ints_from_list(init: i32) -> Vec<i32> {
    let items = get_ints_eager(init);
    filter_above_threshold(&items)
}

// 元のバッファは再利用せず、フィルタ結果は新しいVecに積む
fn filter_above_threshold(items: &[i32]) -> Vec<i32> {
    items
        .iter()
        .copied()
        .filter(|&x| x > FILTER_THRESHOLD)
        .collect()
}
