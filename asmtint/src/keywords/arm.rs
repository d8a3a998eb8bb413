///
/// ARM vocabulary: AArch64 (A64) plus the ARM32/Thumb mnemonics that show
/// up in 32-bit listings. NEON/AdvSIMD and VFP mnemonics are the SIMD kind.
///

use super::KeywordTable;
use crate::lexer::TokenKind;

const REGISTERS: &[&str] = &[
    "sp", "wsp", "lr", "pc", "fp", "ip", "xzr", "wzr", "sb", "sl",
    "nzcv", "fpcr", "fpsr", "apsr", "cpsr", "spsr", "fpscr",
    "tpidr_el0", "tpidrro_el0", "cntvct_el0", "cntfrq_el0",
];

const QUALIFIERS: &[&str] = &[
    // condition codes
    "eq", "ne", "cs", "hs", "cc", "lo", "mi", "pl", "vs", "vc",
    "hi", "ls", "ge", "lt", "gt", "le", "al", "nv",
    // shifts and extends
    "lsl", "lsr", "asr", "ror", "rrx", "msl",
    "uxtb", "uxth", "uxtw", "uxtx", "sxtb", "sxth", "sxtw", "sxtx",
    // barrier options and address modifiers
    "ish", "ishld", "ishst", "sy", "ld", "st", "osh", "nsh",
    "lo12", "got", "got_lo12", "gotpage", "gotpageoff", "page", "pageoff",
];

const INSTRUCTIONS: &[&str] = &[
    // arithmetic and logic
    "add", "adds", "sub", "subs", "adc", "adcs", "sbc", "sbcs", "neg", "negs", "ngc",
    "and", "ands", "orr", "orn", "eor", "eon", "bic", "bics", "mvn", "tst", "teq",
    "cmp", "cmn", "mul", "madd", "msub", "mneg", "smull", "umull", "smulh", "umulh",
    "smaddl", "umaddl", "smsubl", "umsubl", "sdiv", "udiv", "mla", "mls",
    "umlal", "smlal", "rsb", "rsc",
    "clz", "cls", "rbit", "rev", "rev16", "rev32", "rev64",
    "ubfx", "sbfx", "ubfm", "sbfm", "bfi", "bfxil", "bfm", "bfc", "extr",
    // moves
    "mov", "movz", "movn", "movk", "movw", "movt", "adr", "adrp", "mrs", "msr",
    // select and compare
    "csel", "csinc", "csinv", "csneg", "cset", "csetm", "cinc", "cinv", "cneg",
    "ccmp", "ccmn",
    // branches
    "b", "bl", "br", "blr", "ret", "bx", "blx", "cbz", "cbnz", "tbz", "tbnz",
    "beq", "bne", "bcs", "bhs", "bcc", "blo", "bmi", "bpl", "bvs", "bvc",
    "bhi", "bls", "bge", "blt", "bgt", "ble", "it", "ite", "itt", "itte", "ittt",
    // loads and stores
    "ldr", "ldrb", "ldrh", "ldrsb", "ldrsh", "ldrsw", "ldrd", "ldur", "ldurb", "ldurh",
    "ldursb", "ldursh", "ldursw", "str", "strb", "strh", "strd", "stur", "sturb", "sturh",
    "ldp", "ldpsw", "stp", "ldnp", "stnp", "ldm", "ldmia", "ldmdb", "stm", "stmia", "stmdb",
    "push", "pop", "prfm", "pld",
    "ldar", "ldarb", "ldarh", "stlr", "stlrb", "stlrh", "ldxr", "ldxrb", "ldxrh", "stxr",
    "stxrb", "stxrh", "ldaxr", "ldaxrb", "ldaxrh", "stlxr", "stlxrb", "stlxrh", "ldxp",
    "stxp", "ldaxp", "stlxp", "ldrex", "strex", "clrex",
    "cas", "casa", "casal", "casl", "swp", "swpa", "swpal", "ldadd", "ldadda", "ldaddal",
    "ldaddl", "ldclr", "ldclral", "ldset", "ldsetal", "ldeor", "ldeoral",
    // system
    "nop", "yield", "wfe", "wfi", "sev", "sevl", "brk", "bkpt", "hlt", "svc", "hvc", "smc",
    "udf", "dmb", "dsb", "isb", "hint", "paciasp", "autiasp", "bti",
];

const SIMD_INSTRUCTIONS: &[&str] = &[
    // scalar and vector floating point
    "fadd", "fsub", "fmul", "fdiv", "fmadd", "fmsub", "fnmadd", "fnmsub", "fnmul",
    "fabs", "fneg", "fsqrt", "fmin", "fmax", "fminnm", "fmaxnm", "fabd",
    "fcmp", "fcmpe", "fccmp", "fccmpe", "fcsel", "fmov", "frecpe", "frecps", "frsqrte",
    "frsqrts", "fcvt", "fcvtzs", "fcvtzu", "fcvtas", "fcvtau", "fcvtms", "fcvtmu",
    "fcvtns", "fcvtnu", "fcvtps", "fcvtpu", "fcvtl", "fcvtl2", "fcvtn", "fcvtn2",
    "scvtf", "ucvtf", "frinta", "frinti", "frintm", "frintn", "frintp", "frintx", "frintz",
    "fmla", "fmls", "faddp", "fmaxp", "fminp", "fmaxv", "fminv", "fmaxnmv", "fminnmv",
    "fcmeq", "fcmge", "fcmgt", "fcmle", "fcmlt", "facge", "facgt",
    // integer vector
    "ld1", "ld2", "ld3", "ld4", "ld1r", "ld2r", "st1", "st2", "st3", "st4",
    "dup", "ins", "umov", "smov", "movi", "mvni", "ext", "tbl", "tbx",
    "zip1", "zip2", "uzp1", "uzp2", "trn1", "trn2",
    "addv", "addp", "uaddlv", "saddlv", "umaxv", "uminv", "smaxv", "sminv", "cnt",
    "xtn", "xtn2", "sqxtn", "sqxtn2", "uqxtn", "uqxtn2", "sqxtun", "sqxtun2",
    "shl", "sshr", "ushr", "ssra", "usra", "sshl", "ushl", "sshll", "sshll2", "ushll",
    "ushll2", "shrn", "shrn2", "rshrn", "rshrn2", "sqrshrn", "uqrshrn", "sli", "sri",
    "cmeq", "cmge", "cmgt", "cmhi", "cmhs", "cmle", "cmlt", "cmtst",
    "bsl", "bit", "bif", "not", "abs", "sqabs", "sqneg",
    "saddl", "saddl2", "uaddl", "uaddl2", "saddw", "uaddw", "ssubl", "usubl",
    "sabd", "uabd", "saba", "uaba", "sabal", "uabal", "smax", "umax", "smin", "umin",
    "smaxp", "umaxp", "sminp", "uminp", "sqadd", "uqadd", "sqsub", "uqsub",
    "smull2", "umull2", "smlal2", "umlal2", "sqdmulh", "sqrdmulh", "pmul", "pmull", "pmull2",
    "rev64", "sxtl", "sxtl2", "uxtl", "uxtl2",
    "aese", "aesd", "aesmc", "aesimc", "sha1c", "sha256h", "sha256su0", "crc32b",
    "crc32w", "crc32x", "crc32cb", "crc32cw", "crc32cx",
    // ARM32 VFP / NEON
    "vadd", "vsub", "vmul", "vdiv", "vmla", "vmls", "vfma", "vfms", "vneg", "vabs", "vsqrt",
    "vmov", "vmrs", "vmsr", "vldr", "vstr", "vldm", "vstm", "vpush", "vpop",
    "vld1", "vld2", "vst1", "vst2", "vcvt", "vcmp", "vcmpe", "vdup", "vand", "vorr",
    "veor", "vbic", "vbsl", "vmax", "vmin", "vpadd", "vext", "vzip", "vuzp", "vtrn",
    "vrev64", "vshl", "vshr", "vqadd", "vqsub", "vmull", "vmovl", "vmovn", "vtbl",
];

pub(super) fn table() -> KeywordTable {
    KeywordTable::builder()
        .words(REGISTERS, TokenKind::Register)
        .numbered("x", 0..31, &[""], TokenKind::Register)
        .numbered("w", 0..31, &[""], TokenKind::Register)
        .numbered("r", 0..16, &[""], TokenKind::Register)
        .numbered("v", 0..32, &[""], TokenKind::Register)
        .numbered("q", 0..32, &[""], TokenKind::Register)
        .numbered("d", 0..32, &[""], TokenKind::Register)
        .numbered("s", 0..32, &[""], TokenKind::Register)
        .numbered("h", 0..32, &[""], TokenKind::Register)
        .numbered("b", 0..32, &[""], TokenKind::Register)
        .numbered("z", 0..32, &[""], TokenKind::Register)
        .numbered("p", 0..16, &[""], TokenKind::Register)
        .words(QUALIFIERS, TokenKind::Qualifier)
        .words(SIMD_INSTRUCTIONS, TokenKind::InstructionSimd)
        .words(INSTRUCTIONS, TokenKind::Instruction)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_banks() {
        let table = table();
        for reg in ["x0", "x30", "w17", "v31", "q7", "d0", "s31", "r15", "xzr", "lr"] {
            assert_eq!(table.classify_str(reg), TokenKind::Register, "{reg}");
        }
        assert_eq!(table.classify_str("x31"), TokenKind::Identifier);
    }

    #[test]
    fn test_condition_codes_are_qualifiers() {
        let table = table();
        for cc in ["eq", "ne", "hs", "lo", "ge", "lt"] {
            assert_eq!(table.classify_str(cc), TokenKind::Qualifier, "{cc}");
        }
    }

    #[test]
    fn test_scalar_and_neon_split() {
        let table = table();
        assert_eq!(table.classify_str("madd"), TokenKind::Instruction);
        assert_eq!(table.classify_str("cbnz"), TokenKind::Instruction);
        assert_eq!(table.classify_str("fmadd"), TokenKind::InstructionSimd);
        assert_eq!(table.classify_str("ld1"), TokenKind::InstructionSimd);
        assert_eq!(table.classify_str("vadd"), TokenKind::InstructionSimd);
    }
}
