//! 非同期ラッパー vs 同期呼び出し
//!
//! 実際のI/Oを伴わない非同期境界のオーバーヘッドを測定する。
//! `use_task` は呼び出し側でcurrent-threadランタイム上で駆動される前提

const DIVIDEND: f64 = 15.0;

async fn do_work_async(val: i32) -> f64 {
    DIVIDEND / f64::from(val)
}

fn do_work(val: i32) -> f64 {
    DIVIDEND / f64::from(val)
}

/// UseTaskケース: 内側のFutureが完了してから値を返す
pub async fn use_task(init: i32) -> f64 {
    do_work_async(init).await
}

/// DontUseTaskケース: 同じ計算を同期的に行う
pub fn dont_use_task(init: i32) -> f64 {
    do_work(init)
}
