///
/// x86 / x86-64 vocabulary (Intel syntax, lowercase as printed by LLVM).
///

use super::KeywordTable;
use crate::lexer::TokenKind;

const REGISTERS: &[&str] = &[
    "rax", "rbx", "rcx", "rdx", "rsi", "rdi", "rbp", "rsp",
    "eax", "ebx", "ecx", "edx", "esi", "edi", "ebp", "esp",
    "ax", "bx", "cx", "dx", "si", "di", "bp", "sp",
    "al", "bl", "cl", "dl", "ah", "bh", "ch", "dh",
    "sil", "dil", "bpl", "spl",
    "rip", "eip", "ip",
    "cs", "ds", "es", "fs", "gs", "ss",
    "st", "rflags", "eflags", "mxcsr",
];

const QUALIFIERS: &[&str] = &[
    "byte", "word", "dword", "qword", "tbyte", "oword",
    "xmmword", "ymmword", "zmmword", "fword",
    "ptr", "offset", "rel", "short", "near", "far",
    "lock", "rep", "repe", "repne", "repz", "repnz",
    "sae",
];

const INSTRUCTIONS: &[&str] = &[
    // data movement
    "mov", "movabs", "movzx", "movsx", "movsxd", "movbe", "lea", "xchg", "xadd",
    "cmpxchg", "cmpxchg8b", "cmpxchg16b", "push", "pop", "pushf", "popf", "pushfq", "popfq",
    "bswap", "cwd", "cdq", "cqo", "cbw", "cwde", "cdqe", "lahf", "sahf",
    "movsb", "movsw", "movsq", "stosb", "stosw", "stosd", "stosq",
    "lodsb", "lodsw", "lodsd", "lodsq", "scasb", "scasw", "scasd", "scasq",
    "cmpsb", "cmpsw", "cmpsq",
    // arithmetic and logic
    "add", "adc", "sub", "sbb", "imul", "mul", "idiv", "div", "inc", "dec", "neg",
    "cmp", "test", "and", "or", "xor", "not",
    "shl", "shr", "sal", "sar", "rol", "ror", "rcl", "rcr", "shld", "shrd",
    "shlx", "shrx", "sarx", "rorx", "mulx", "adcx", "adox",
    "bt", "bts", "btr", "btc", "bsf", "bsr", "tzcnt", "lzcnt", "popcnt",
    "andn", "bextr", "blsi", "blsmsk", "blsr", "bzhi", "pdep", "pext",
    // control flow
    "jmp", "call", "ret", "retq", "leave", "enter", "loop", "loope", "loopne",
    "jo", "jno", "jb", "jnb", "jc", "jnc", "jae", "jnae", "je", "jz", "jne", "jnz",
    "jbe", "jna", "ja", "jnbe", "js", "jns", "jp", "jpe", "jnp", "jpo",
    "jl", "jnge", "jge", "jnl", "jle", "jng", "jg", "jnle", "jcxz", "jecxz", "jrcxz",
    "seto", "setno", "setb", "setnb", "setc", "setnc", "setae", "setnae", "sete", "setz",
    "setne", "setnz", "setbe", "setna", "seta", "setnbe", "sets", "setns", "setp", "setpe",
    "setnp", "setpo", "setl", "setnge", "setge", "setnl", "setle", "setng", "setg", "setnle",
    "cmovo", "cmovno", "cmovb", "cmovnb", "cmovc", "cmovnc", "cmovae", "cmovnae", "cmove",
    "cmovz", "cmovne", "cmovnz", "cmovbe", "cmovna", "cmova", "cmovnbe", "cmovs", "cmovns",
    "cmovp", "cmovpe", "cmovnp", "cmovpo", "cmovl", "cmovnge", "cmovge", "cmovnl", "cmovle",
    "cmovng", "cmovg", "cmovnle",
    // system and misc
    "nop", "int", "int3", "into", "ud2", "hlt", "pause", "cpuid", "rdtsc", "rdtscp",
    "syscall", "sysenter", "sysexit", "sysret", "iret", "iretq",
    "clc", "stc", "cmc", "cld", "std", "cli", "sti",
    "mfence", "lfence", "sfence", "prefetcht0", "prefetcht1", "prefetcht2", "prefetchnta",
    "prefetchw", "clflush", "clflushopt", "clwb", "xgetbv", "xsave", "xrstor",
    "rdrand", "rdseed", "crc32", "endbr64", "endbr32",
    // x87
    "fld", "fld1", "fldz", "fldpi", "fst", "fstp", "fild", "fist", "fistp", "fisttp",
    "fadd", "faddp", "fsub", "fsubp", "fsubr", "fsubrp", "fmul", "fmulp",
    "fdiv", "fdivp", "fdivr", "fdivrp", "fchs", "fabs", "fsqrt", "fsin", "fcos", "fsincos",
    "fptan", "fpatan", "fprem", "fprem1", "frndint", "fscale", "fxtract", "fyl2x", "f2xm1",
    "fcom", "fcomp", "fcompp", "fcomi", "fcomip", "fucom", "fucomp", "fucompp",
    "fucomi", "fucomip", "fxch", "fnstsw", "fstsw", "fnstcw", "fldcw", "fwait", "fninit",
    "fcmovb", "fcmove", "fcmovbe", "fcmovu", "fcmovnb", "fcmovne", "fcmovnbe", "fcmovnu",
];

const SIMD_INSTRUCTIONS: &[&str] = &[
    // MMX / SSE integer
    "emms", "movd", "movq", "movdqa", "movdqu", "movntdq", "movntdqa", "lddqu",
    "paddb", "paddw", "paddd", "paddq", "paddsb", "paddsw", "paddusb", "paddusw",
    "psubb", "psubw", "psubd", "psubq", "psubsb", "psubsw", "psubusb", "psubusw",
    "pmullw", "pmulld", "pmulhw", "pmulhuw", "pmuludq", "pmuldq", "pmaddwd", "pmaddubsw",
    "pand", "pandn", "por", "pxor", "psllw", "pslld", "psllq", "psrlw", "psrld", "psrlq",
    "psraw", "psrad", "pslldq", "psrldq",
    "pcmpeqb", "pcmpeqw", "pcmpeqd", "pcmpeqq", "pcmpgtb", "pcmpgtw", "pcmpgtd", "pcmpgtq",
    "pmaxsb", "pmaxsw", "pmaxsd", "pmaxub", "pmaxuw", "pmaxud",
    "pminsb", "pminsw", "pminsd", "pminub", "pminuw", "pminud",
    "pabsb", "pabsw", "pabsd", "pavgb", "pavgw", "psadbw", "psignb", "psignw", "psignd",
    "packsswb", "packssdw", "packuswb", "packusdw",
    "punpcklbw", "punpcklwd", "punpckldq", "punpcklqdq",
    "punpckhbw", "punpckhwd", "punpckhdq", "punpckhqdq",
    "pshufb", "pshufd", "pshufhw", "pshuflw", "palignr", "pblendw", "pblendvb",
    "pextrb", "pextrw", "pextrd", "pextrq", "pinsrb", "pinsrw", "pinsrd", "pinsrq",
    "pmovmskb", "pmovsxbw", "pmovsxbd", "pmovsxbq", "pmovsxwd", "pmovsxwq", "pmovsxdq",
    "pmovzxbw", "pmovzxbd", "pmovzxbq", "pmovzxwd", "pmovzxwq", "pmovzxdq",
    "ptest", "phaddw", "phaddd", "phsubw", "phsubd", "phminposuw",
    "pclmulqdq", "aesenc", "aesenclast", "aesdec", "aesdeclast", "aesimc", "aeskeygenassist",
    // SSE floating point
    "movaps", "movups", "movapd", "movupd", "movss", "movsd", "movhps", "movlps",
    "movhpd", "movlpd", "movhlps", "movlhps", "movmskps", "movmskpd", "movntps", "movntpd",
    "movddup", "movshdup", "movsldup",
    "addps", "addpd", "addss", "addsd", "subps", "subpd", "subss", "subsd",
    "mulps", "mulpd", "mulss", "mulsd", "divps", "divpd", "divss", "divsd",
    "sqrtps", "sqrtpd", "sqrtss", "sqrtsd", "rsqrtps", "rsqrtss", "rcpps", "rcpss",
    "minps", "minpd", "minss", "minsd", "maxps", "maxpd", "maxss", "maxsd",
    "andps", "andpd", "andnps", "andnpd", "orps", "orpd", "xorps", "xorpd",
    "cmpps", "cmppd", "cmpss", "cmpsd", "comiss", "comisd", "ucomiss", "ucomisd",
    "shufps", "shufpd", "unpcklps", "unpcklpd", "unpckhps", "unpckhpd",
    "blendps", "blendpd", "blendvps", "blendvpd", "dpps", "dppd", "insertps", "extractps",
    "roundps", "roundpd", "roundss", "roundsd", "haddps", "haddpd", "hsubps", "hsubpd",
    "addsubps", "addsubpd",
    "cvtsi2ss", "cvtsi2sd", "cvtss2si", "cvtsd2si", "cvttss2si", "cvttsd2si",
    "cvtss2sd", "cvtsd2ss", "cvtps2pd", "cvtpd2ps", "cvtdq2ps", "cvtps2dq", "cvttps2dq",
    "cvtdq2pd", "cvtpd2dq", "cvttpd2dq",
    "ldmxcsr", "stmxcsr",
    // AVX / AVX2 / FMA
    "vmovaps", "vmovups", "vmovapd", "vmovupd", "vmovss", "vmovsd", "vmovd", "vmovq",
    "vmovdqa", "vmovdqu", "vmovdqa32", "vmovdqa64", "vmovdqu8", "vmovdqu16", "vmovdqu32",
    "vmovdqu64", "vmovhps", "vmovlps", "vmovddup", "vmovshdup", "vmovsldup", "vmovmskps",
    "vmovntps", "vmovntdq", "vmaskmovps", "vpmaskmovd", "vpmaskmovq",
    "vaddps", "vaddpd", "vaddss", "vaddsd", "vsubps", "vsubpd", "vsubss", "vsubsd",
    "vmulps", "vmulpd", "vmulss", "vmulsd", "vdivps", "vdivpd", "vdivss", "vdivsd",
    "vsqrtps", "vsqrtpd", "vsqrtss", "vsqrtsd", "vrsqrtps", "vrsqrtss", "vrcpps", "vrcpss",
    "vminps", "vminpd", "vminss", "vminsd", "vmaxps", "vmaxpd", "vmaxss", "vmaxsd",
    "vandps", "vandpd", "vandnps", "vandnpd", "vorps", "vorpd", "vxorps", "vxorpd",
    "vcmpps", "vcmppd", "vcmpss", "vcmpsd", "vcomiss", "vcomisd", "vucomiss", "vucomisd",
    "vshufps", "vshufpd", "vunpcklps", "vunpcklpd", "vunpckhps", "vunpckhpd",
    "vblendps", "vblendpd", "vblendvps", "vblendvpd", "vpblendd", "vpblendvb", "vpblendw",
    "vinsertps", "vextractps", "vinsertf128", "vextractf128", "vinserti128", "vextracti128",
    "vperm2f128", "vperm2i128", "vpermilps", "vpermilpd", "vpermps", "vpermpd", "vpermd",
    "vpermq", "vbroadcastss", "vbroadcastsd", "vbroadcastf128", "vpbroadcastb",
    "vpbroadcastw", "vpbroadcastd", "vpbroadcastq",
    "vroundps", "vroundpd", "vroundss", "vroundsd", "vhaddps", "vhaddpd", "vdpps",
    "vcvtsi2ss", "vcvtsi2sd", "vcvtss2si", "vcvtsd2si", "vcvttss2si", "vcvttsd2si",
    "vcvtss2sd", "vcvtsd2ss", "vcvtps2pd", "vcvtpd2ps", "vcvtdq2ps", "vcvtps2dq",
    "vcvttps2dq", "vcvtph2ps", "vcvtps2ph",
    "vpaddb", "vpaddw", "vpaddd", "vpaddq", "vpsubb", "vpsubw", "vpsubd", "vpsubq",
    "vpmullw", "vpmulld", "vpmuludq", "vpmuldq", "vpmaddwd",
    "vpand", "vpandn", "vpor", "vpxor", "vpandd", "vpandq", "vpord", "vporq", "vpxord", "vpxorq",
    "vpsllw", "vpslld", "vpsllq", "vpsrlw", "vpsrld", "vpsrlq", "vpsraw", "vpsrad",
    "vpsllvd", "vpsllvq", "vpsrlvd", "vpsrlvq", "vpsravd",
    "vpcmpeqb", "vpcmpeqw", "vpcmpeqd", "vpcmpeqq", "vpcmpgtb", "vpcmpgtw", "vpcmpgtd",
    "vpcmpgtq", "vpmaxsd", "vpmaxud", "vpminsd", "vpminud", "vpabsd",
    "vpshufb", "vpshufd", "vpalignr", "vpunpcklbw", "vpunpcklwd", "vpunpckldq",
    "vpunpcklqdq", "vpunpckhbw", "vpunpckhwd", "vpunpckhdq", "vpunpckhqdq",
    "vpackssdw", "vpackusdw", "vpacksswb", "vpackuswb",
    "vpextrb", "vpextrw", "vpextrd", "vpextrq", "vpinsrb", "vpinsrw", "vpinsrd", "vpinsrq",
    "vpmovmskb", "vptest", "vtestps", "vzeroupper", "vzeroall",
    "vpgatherdd", "vpgatherqd", "vgatherdps", "vgatherqps", "vgatherdpd", "vgatherqpd",
    "vfmadd132ps", "vfmadd213ps", "vfmadd231ps", "vfmadd132pd", "vfmadd213pd", "vfmadd231pd",
    "vfmadd132ss", "vfmadd213ss", "vfmadd231ss", "vfmadd132sd", "vfmadd213sd", "vfmadd231sd",
    "vfmsub132ps", "vfmsub213ps", "vfmsub231ps", "vfmsub132pd", "vfmsub213pd", "vfmsub231pd",
    "vfnmadd132ps", "vfnmadd213ps", "vfnmadd231ps", "vfnmadd132pd", "vfnmadd213pd",
    "vfnmadd231pd", "vfnmsub132ps", "vfnmsub213ps", "vfnmsub231ps",
    // AVX-512 (common subset)
    "vpternlogd", "vpternlogq", "vpcmpd", "vpcmpud", "vpcmpq", "vpcmpuq", "vcompressps",
    "vexpandps", "vpcompressd", "vpexpandd", "vpermt2ps", "vpermt2d", "vpermi2ps",
    "vscatterdps", "vpscatterdd", "vreduceps", "vrndscaleps", "vrndscalepd", "vgetexpps",
    "vgetmantps", "vscalefps", "vrcp14ps", "vrsqrt14ps", "vpmovdb", "vpmovdw", "vpmovqd",
    "vextractf32x4", "vextractf64x4", "vinsertf32x4", "vinsertf64x4", "vshuff32x4",
    "kmovw", "kmovb", "kmovd", "kmovq", "kortestw", "kandw", "korw", "kxorw", "knotw",
];

pub(super) fn table() -> KeywordTable {
    KeywordTable::builder()
        .words(REGISTERS, TokenKind::Register)
        .numbered("r", 8..16, &["", "d", "w", "b"], TokenKind::Register)
        .numbered("xmm", 0..32, &[""], TokenKind::Register)
        .numbered("ymm", 0..32, &[""], TokenKind::Register)
        .numbered("zmm", 0..32, &[""], TokenKind::Register)
        .numbered("mm", 0..8, &[""], TokenKind::Register)
        .numbered("k", 0..8, &[""], TokenKind::Register)
        .numbered("cr", 0..9, &[""], TokenKind::Register)
        .numbered("dr", 0..8, &[""], TokenKind::Register)
        .words(QUALIFIERS, TokenKind::Qualifier)
        .words(SIMD_INSTRUCTIONS, TokenKind::InstructionSimd)
        .words(INSTRUCTIONS, TokenKind::Instruction)
        .build()
}
