//! 例外(パニック)によるエラー通知 vs 事前分岐
//!
//! 整数除算`15 / init`をゼロ除算パニックの捕捉で処理する2通りと、
//! 事前チェックで分岐する1通りを比較する。いずれも商をそのまま返す

use std::any::Any;
use std::cell::Cell;
use std::panic;
use std::sync::Once;

const DIVIDEND: i32 = 15;
const DIVIDE_BY_ZERO_MESSAGE: &str = "attempt to divide by zero";

thread_local! {
    static FAULT_EXPECTED: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// 意図的に発生させるゼロ除算パニックの出力を抑制するフックを登録する
///
/// 抑制されるのはこのモジュールのケース実行中に起きたゼロ除算のみで、
/// それ以外のパニックは元のフックに委譲する。複数回呼んでも登録は1回
pub fn install_quiet_fault_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let expected = FAULT_EXPECTED.with(Cell::get);
            if expected && is_divide_by_zero(info.payload()) {
                return;
            }
            previous(info);
        }));
    });
}

/// パニックのペイロードがゼロ除算かどうか
pub fn is_divide_by_zero(payload: &(dyn Any + Send)) -> bool {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        return message.contains(DIVIDE_BY_ZERO_MESSAGE);
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.contains(DIVIDE_BY_ZERO_MESSAGE);
    }
    false
}

struct ExpectFault;

impl ExpectFault {
    fn enter() -> Self {
        FAULT_EXPECTED.with(|flag| flag.set(true));
        Self
    }
}

impl Drop for ExpectFault {
    fn drop(&mut self) {
        FAULT_EXPECTED.with(|flag| flag.set(false));
    }
}

/// UseExceptionsケース: 種類を問わず全てのパニックを0に変換
pub fn use_exceptions(init: i32) -> i32 {
    let _guard = ExpectFault::enter();
    panic::catch_unwind(move || DIVIDEND / init).unwrap_or(0)
}

/// UseSpecificExceptionsケース: ゼロ除算のみを0に変換し、他は再送出
pub fn use_specific_exceptions(init: i32) -> i32 {
    let _guard = ExpectFault::enter();
    match panic::catch_unwind(move || DIVIDEND / init) {
        Ok(quotient) => quotient,
        Err(payload) if is_divide_by_zero(payload.as_ref()) => 0,
        Err(payload) => panic::resume_unwind(payload),
    }
}

/// DontUseExceptionsケース: 除算前に分岐する
pub fn dont_use_exceptions(init: i32) -> i32 {
    if init == 0 {
        return 0;
    }

    DIVIDEND / init
}
