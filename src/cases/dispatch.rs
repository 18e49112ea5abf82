//! 分岐ディスパッチ比較ケース
//!
//! 同じキー→値の対応を、文形式のmatch・式形式のmatch・if/else連鎖・
//! ハッシュテーブル参照の4通りで実装し、キーの位置による探索コストを比較する。
//! 結果はいずれも`result + result`

use std::collections::HashMap;
use std::sync::LazyLock;

/// 表にないキーの値
pub const DEFAULT_VALUE: i32 = 5435;

/// キーと値の対応表（"A".."Z", "AA".."AI"）
pub const DISPATCH_TABLE: [(&str, i32); 35] = [
    ("A", 1),
    ("B", 9),
    ("C", 3),
    ("D", 14),
    ("E", 5),
    ("F", 6),
    ("G", 7),
    ("H", 84),
    ("I", 9),
    ("J", 150),
    ("K", 11),
    ("L", 12),
    ("M", 13),
    ("N", 14),
    ("O", 165),
    ("P", 222),
    ("Q", 17),
    ("R", 18),
    ("S", 111),
    ("T", 270),
    ("U", 21),
    ("V", 22),
    ("W", 23),
    ("X", 24),
    ("Y", 432),
    ("Z", 726),
    ("AA", 27),
    ("AB", 2888),
    ("AC", 29),
    ("AD", 30),
    ("AE", 31),
    ("AF", 3212),
    ("AG", 33),
    ("AH", 3324),
    ("AI", 315),
];

static LOOKUP: LazyLock<HashMap<&'static str, i32>> =
    LazyLock::new(|| DISPATCH_TABLE.iter().copied().collect());

/// GetSwitchStatementケース
pub fn get_switch_statement(b: &str) -> i32 {
    let result;
    match b {
        "A" => result = 1,
        "B" => result = 9,
        "C" => result = 3,
        "D" => result = 14,
        "E" => result = 5,
        "F" => result = 6,
        "G" => result = 7,
        "H" => result = 84,
        "I" => result = 9,
        "J" => result = 150,
        "K" => result = 11,
        "L" => result = 12,
        "M" => result = 13,
        "N" => result = 14,
        "O" => result = 165,
        "P" => result = 222,
        "Q" => result = 17,
        "R" => result = 18,
        "S" => result = 111,
        "T" => result = 270,
        "U" => result = 21,
        "V" => result = 22,
        "W" => result = 23,
        "X" => result = 24,
        "Y" => result = 432,
        "Z" => result = 726,
        "AA" => result = 27,
        "AB" => result = 2888,
        "AC" => result = 29,
        "AD" => result = 30,
        "AE" => result = 31,
        "AF" => result = 3212,
        "AG" => result = 33,
        "AH" => result = 3324,
        "AI" => result = 315,
        _ => result = DEFAULT_VALUE,
    }

    result + result
}

/// GetSwitchExpressionケース
pub fn get_switch_expression(b: &str) -> i32 {
    let result = match b {
        "A" => 1,
        "B" => 9,
        "C" => 3,
        "D" => 14,
        "E" => 5,
        "F" => 6,
        "G" => 7,
        "H" => 84,
        "I" => 9,
        "J" => 150,
        "K" => 11,
        "L" => 12,
        "M" => 13,
        "N" => 14,
        "O" => 165,
        "P" => 222,
        "Q" => 17,
        "R" => 18,
        "S" => 111,
        "T" => 270,
        "U" => 21,
        "V" => 22,
        "W" => 23,
        "X" => 24,
        "Y" => 432,
        "Z" => 726,
        "AA" => 27,
        "AB" => 2888,
        "AC" => 29,
        "AD" => 30,
        "AE" => 31,
        "AF" => 3212,
        "AG" => 33,
        "AH" => 3324,
        "AI" => 315,
        _ => DEFAULT_VALUE,
    };

    result + result
}

/// GetIfThenElseケース
pub fn get_if_then_else(b: &str) -> i32 {
    let result = if b == "A" {
        1
    } else if b == "B" {
        9
    } else if b == "C" {
        3
    } else if b == "D" {
        14
    } else if b == "E" {
        5
    } else if b == "F" {
        6
    } else if b == "G" {
        7
    } else if b == "H" {
        84
    } else if b == "I" {
        9
    } else if b == "J" {
        150
    } else if b == "K" {
        11
    } else if b == "L" {
        12
    } else if b == "M" {
        13
    } else if b == "N" {
        14
    } else if b == "O" {
        165
    } else if b == "P" {
        222
    } else if b == "Q" {
        17
    } else if b == "R" {
        18
    } else if b == "S" {
        111
    } else if b == "T" {
        270
    } else if b == "U" {
        21
    } else if b == "V" {
        22
    } else if b == "W" {
        23
    } else if b == "X" {
        24
    } else if b == "Y" {
        432
    } else if b == "Z" {
        726
    } else if b == "AA" {
        27
    } else if b == "AB" {
        2888
    } else if b == "AC" {
        29
    } else if b == "AD" {
        30
    } else if b == "AE" {
        31
    } else if b == "AF" {
        3212
    } else if b == "AG" {
        33
    } else if b == "AH" {
        3324
    } else if b == "AI" {
        315
    } else {
        DEFAULT_VALUE
    };

    result + result
}

/// GetDispatchTableケース: ハッシュテーブル参照
pub fn get_dispatch_table(b: &str) -> i32 {
    let result = LOOKUP.get(b).copied().unwrap_or(DEFAULT_VALUE);

    result + result
}
