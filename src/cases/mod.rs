// ベンチマークケース本体
// 各ケースは独立した関数で、戻り値以外の副作用を持たない

pub mod dispatch;
pub mod fault;
pub mod object_size;
pub mod sequence;
pub mod task;
pub mod wrapper;

/// リスト系ケースで追加する要素数
pub const LISTS_COUNT: i32 = 1_000_000;

/// リスト系ケースのフィルタ閾値（これより大きい値を残す）
pub const FILTER_THRESHOLD: i32 = 500_000;

pub use dispatch::{
    get_dispatch_table, get_if_then_else, get_switch_expression, get_switch_statement,
    DISPATCH_TABLE,
};
pub use fault::{dont_use_exceptions, use_exceptions, use_specific_exceptions};
pub use object_size::{flat_object, nested_object, FlatObject, NestedObject};
pub use sequence::{get_ints, get_ints_from_ienumerable, get_ints_from_list, IntSequence};
pub use task::{dont_use_task, use_task};
pub use wrapper::{int_wrapper, list_of_ints, Wrapper};
