///
/// WebAssembly text vocabulary.
///
/// Mnemonics are dotted (`i32.add`, `local.get`). The table accepts `.` as a
/// trailing identifier character, so the type/category prefix lexes as one
/// register-like token (`i32.`) and the operation after it as another.
/// There is no SIMD kind for this target.
///

use super::KeywordTable;
use crate::lexer::TokenKind;

const PREFIXES: &[&str] = &[
    "memory.", "local.", "global.", "table.", "ref.",
    "i32.", "i64.", "f32.", "f64.",
];

const QUALIFIERS: &[&str] = &[
    "eqz", "eq", "ne", "lt", "gt", "le", "ge",
    "lt_s", "lt_u", "gt_s", "gt_u", "le_s", "le_u", "ge_s", "ge_u",
    "offset", "align",
    "load", "load8_s", "load8_u", "load16_s", "load16_u", "load32_s", "load32_u",
    "store", "store8", "store16", "store32",
];

const INSTRUCTIONS: &[&str] = &[
    // control flow
    "block", "loop", "if", "else", "end", "br", "br_if", "br_table", "return",
    "call", "call_indirect", "return_call", "return_call_indirect",
    "unreachable", "nop", "drop", "select",
    "end_block", "end_loop", "end_if", "end_function", "end_try",
    "try", "catch", "catch_all", "throw", "rethrow", "delegate",
    // variable and memory access
    "get", "set", "tee", "size", "grow", "fill", "copy", "init", "null", "is_null", "func",
    // arithmetic
    "const", "add", "sub", "mul", "div", "div_s", "div_u", "rem_s", "rem_u",
    "and", "or", "xor", "shl", "shr_s", "shr_u", "rotl", "rotr",
    "clz", "ctz", "popcnt", "abs", "neg", "ceil", "floor", "trunc", "nearest", "sqrt",
    "min", "max", "copysign",
    // conversions
    "wrap_i64", "extend_i32_s", "extend_i32_u", "extend8_s", "extend16_s", "extend32_s",
    "trunc_f32_s", "trunc_f32_u", "trunc_f64_s", "trunc_f64_u",
    "trunc_sat_f32_s", "trunc_sat_f32_u", "trunc_sat_f64_s", "trunc_sat_f64_u",
    "convert_i32_s", "convert_i32_u", "convert_i64_s", "convert_i64_u",
    "demote_f64", "promote_f32",
    "reinterpret_f32", "reinterpret_f64", "reinterpret_i32", "reinterpret_i64",
];

pub(super) fn table() -> KeywordTable {
    KeywordTable::builder()
        .words(PREFIXES, TokenKind::Register)
        .words(QUALIFIERS, TokenKind::Qualifier)
        .words(INSTRUCTIONS, TokenKind::Instruction)
        .trailing_char('.')
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_include_dot() {
        let table = table();
        for prefix in PREFIXES {
            assert!(prefix.ends_with('.'));
            assert_eq!(table.classify_str(prefix), TokenKind::Register);
        }
        assert_eq!(table.classify_str("local"), TokenKind::Identifier);
    }

    #[test]
    fn test_memory_suffixes() {
        let table = table();
        assert_eq!(table.classify_str("load8_u"), TokenKind::Qualifier);
        assert_eq!(table.classify_str("store"), TokenKind::Qualifier);
        assert_eq!(table.classify_str("align"), TokenKind::Qualifier);
        assert_eq!(table.classify_str("end_function"), TokenKind::Instruction);
    }
}
