//! Target instruction set tables
//! 
//! Opcode numbers, storage classes and function-control masks as they
//! appear in the binary word stream. `Op` covers the complete core
//! instruction set, 0 through `OpImageSparseRead` (320).

use crate::error::IrError;
use crate::types::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opcode of a single instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum Op {
    // Miscellaneous and debug
    Nop = 0,
    Undef = 1,
    SourceContinued = 2,
    Source = 3,
    SourceExtension = 4,
    Name = 5,
    MemberName = 6,
    String = 7,
    Line = 8,

    // Extensions and mode setting
    Extension = 10,
    ExtInstImport = 11,
    ExtInst = 12,
    MemoryModel = 14,
    EntryPoint = 15,
    ExecutionMode = 16,
    Capability = 17,

    // Type declarations
    TypeVoid = 19,
    TypeBool = 20,
    TypeInt = 21,
    TypeFloat = 22,
    TypeVector = 23,
    TypeMatrix = 24,
    TypeImage = 25,
    TypeSampler = 26,
    TypeSampledImage = 27,
    TypeArray = 28,
    TypeRuntimeArray = 29,
    TypeStruct = 30,
    TypeOpaque = 31,
    TypePointer = 32,
    TypeFunction = 33,
    TypeEvent = 34,
    TypeDeviceEvent = 35,
    TypeReserveId = 36,
    TypeQueue = 37,
    TypePipe = 38,
    TypeForwardPointer = 39,

    // Constants
    ConstantTrue = 41,
    ConstantFalse = 42,
    Constant = 43,
    ConstantComposite = 44,
    ConstantSampler = 45,
    ConstantNull = 46,
    SpecConstantTrue = 48,
    SpecConstantFalse = 49,
    SpecConstant = 50,
    SpecConstantComposite = 51,
    SpecConstantOp = 52,

    // Functions
    Function = 54,
    FunctionParameter = 55,
    FunctionEnd = 56,
    FunctionCall = 57,

    // Memory
    Variable = 59,
    ImageTexelPointer = 60,
    Load = 61,
    Store = 62,
    CopyMemory = 63,
    CopyMemorySized = 64,
    AccessChain = 65,
    InBoundsAccessChain = 66,
    PtrAccessChain = 67,
    ArrayLength = 68,
    GenericPtrMemSemantics = 69,
    InBoundsPtrAccessChain = 70,

    // Annotations
    Decorate = 71,
    MemberDecorate = 72,
    DecorationGroup = 73,
    GroupDecorate = 74,
    GroupMemberDecorate = 75,

    // Composites
    VectorExtractDynamic = 77,
    VectorInsertDynamic = 78,
    VectorShuffle = 79,
    CompositeConstruct = 80,
    CompositeExtract = 81,
    CompositeInsert = 82,
    CopyObject = 83,
    Transpose = 84,

    // Images
    SampledImage = 86,
    ImageSampleImplicitLod = 87,
    ImageSampleExplicitLod = 88,
    ImageSampleDrefImplicitLod = 89,
    ImageSampleDrefExplicitLod = 90,
    ImageSampleProjImplicitLod = 91,
    ImageSampleProjExplicitLod = 92,
    ImageSampleProjDrefImplicitLod = 93,
    ImageSampleProjDrefExplicitLod = 94,
    ImageFetch = 95,
    ImageGather = 96,
    ImageDrefGather = 97,
    ImageRead = 98,
    ImageWrite = 99,
    Image = 100,
    ImageQueryFormat = 101,
    ImageQueryOrder = 102,
    ImageQuerySizeLod = 103,
    ImageQuerySize = 104,
    ImageQueryLod = 105,
    ImageQueryLevels = 106,
    ImageQuerySamples = 107,

    // Conversions
    ConvertFToU = 109,
    ConvertFToS = 110,
    ConvertSToF = 111,
    ConvertUToF = 112,
    UConvert = 113,
    SConvert = 114,
    FConvert = 115,
    QuantizeToF16 = 116,
    ConvertPtrToU = 117,
    SatConvertSToU = 118,
    SatConvertUToS = 119,
    ConvertUToPtr = 120,
    PtrCastToGeneric = 121,
    GenericCastToPtr = 122,
    GenericCastToPtrExplicit = 123,
    Bitcast = 124,

    // Arithmetic
    SNegate = 126,
    FNegate = 127,
    IAdd = 128,
    FAdd = 129,
    ISub = 130,
    FSub = 131,
    IMul = 132,
    FMul = 133,
    UDiv = 134,
    SDiv = 135,
    FDiv = 136,
    UMod = 137,
    SRem = 138,
    SMod = 139,
    FRem = 140,
    FMod = 141,
    VectorTimesScalar = 142,
    MatrixTimesScalar = 143,
    VectorTimesMatrix = 144,
    MatrixTimesVector = 145,
    MatrixTimesMatrix = 146,
    OuterProduct = 147,
    Dot = 148,
    IAddCarry = 149,
    ISubBorrow = 150,
    UMulExtended = 151,
    SMulExtended = 152,

    // Relational and logical
    Any = 154,
    All = 155,
    IsNan = 156,
    IsInf = 157,
    IsFinite = 158,
    IsNormal = 159,
    SignBitSet = 160,
    LessOrGreater = 161,
    Ordered = 162,
    Unordered = 163,
    LogicalEqual = 164,
    LogicalNotEqual = 165,
    LogicalOr = 166,
    LogicalAnd = 167,
    LogicalNot = 168,
    Select = 169,
    IEqual = 170,
    INotEqual = 171,
    UGreaterThan = 172,
    SGreaterThan = 173,
    UGreaterThanEqual = 174,
    SGreaterThanEqual = 175,
    ULessThan = 176,
    SLessThan = 177,
    ULessThanEqual = 178,
    SLessThanEqual = 179,
    FOrdEqual = 180,
    FUnordEqual = 181,
    FOrdNotEqual = 182,
    FUnordNotEqual = 183,
    FOrdLessThan = 184,
    FUnordLessThan = 185,
    FOrdGreaterThan = 186,
    FUnordGreaterThan = 187,
    FOrdLessThanEqual = 188,
    FUnordLessThanEqual = 189,
    FOrdGreaterThanEqual = 190,
    FUnordGreaterThanEqual = 191,

    // Bit operations
    ShiftRightLogical = 194,
    ShiftRightArithmetic = 195,
    ShiftLeftLogical = 196,
    BitwiseOr = 197,
    BitwiseXor = 198,
    BitwiseAnd = 199,
    Not = 200,
    BitFieldInsert = 201,
    BitFieldSExtract = 202,
    BitFieldUExtract = 203,
    BitReverse = 204,
    BitCount = 205,

    // Derivatives
    DPdx = 207,
    DPdy = 208,
    Fwidth = 209,
    DPdxFine = 210,
    DPdyFine = 211,
    FwidthFine = 212,
    DPdxCoarse = 213,
    DPdyCoarse = 214,
    FwidthCoarse = 215,

    // Primitives
    EmitVertex = 218,
    EndPrimitive = 219,
    EmitStreamVertex = 220,
    EndStreamPrimitive = 221,

    // Barriers
    ControlBarrier = 224,
    MemoryBarrier = 225,

    // Atomics
    AtomicLoad = 227,
    AtomicStore = 228,
    AtomicExchange = 229,
    AtomicCompareExchange = 230,
    AtomicCompareExchangeWeak = 231,
    AtomicIIncrement = 232,
    AtomicIDecrement = 233,
    AtomicIAdd = 234,
    AtomicISub = 235,
    AtomicSMin = 236,
    AtomicUMin = 237,
    AtomicSMax = 238,
    AtomicUMax = 239,
    AtomicAnd = 240,
    AtomicOr = 241,
    AtomicXor = 242,

    // Control flow
    Phi = 245,
    LoopMerge = 246,
    SelectionMerge = 247,
    Label = 248,
    Branch = 249,
    BranchConditional = 250,
    Switch = 251,
    Kill = 252,
    Return = 253,
    ReturnValue = 254,
    Unreachable = 255,
    LifetimeStart = 256,
    LifetimeStop = 257,

    // Group
    GroupAsyncCopy = 259,
    GroupWaitEvents = 260,
    GroupAll = 261,
    GroupAny = 262,
    GroupBroadcast = 263,
    GroupIAdd = 264,
    GroupFAdd = 265,
    GroupFMin = 266,
    GroupUMin = 267,
    GroupSMin = 268,
    GroupFMax = 269,
    GroupUMax = 270,
    GroupSMax = 271,

    // Pipes
    ReadPipe = 274,
    WritePipe = 275,
    ReservedReadPipe = 276,
    ReservedWritePipe = 277,
    ReserveReadPipePackets = 278,
    ReserveWritePipePackets = 279,
    CommitReadPipe = 280,
    CommitWritePipe = 281,
    IsValidReserveId = 282,
    GetNumPipePackets = 283,
    GetMaxPipePackets = 284,
    GroupReserveReadPipePackets = 285,
    GroupReserveWritePipePackets = 286,
    GroupCommitReadPipe = 287,
    GroupCommitWritePipe = 288,

    // Device-side enqueue
    EnqueueMarker = 291,
    EnqueueKernel = 292,
    GetKernelNDrangeSubGroupCount = 293,
    GetKernelNDrangeMaxSubGroupSize = 294,
    GetKernelWorkGroupSize = 295,
    GetKernelPreferredWorkGroupSizeMultiple = 296,
    RetainEvent = 297,
    ReleaseEvent = 298,
    CreateUserEvent = 299,
    IsValidEvent = 300,
    SetUserEventStatus = 301,
    CaptureEventProfilingInfo = 302,
    GetDefaultQueue = 303,
    BuildNDRange = 304,

    // Sparse images
    ImageSparseSampleImplicitLod = 305,
    ImageSparseSampleExplicitLod = 306,
    ImageSparseSampleDrefImplicitLod = 307,
    ImageSparseSampleDrefExplicitLod = 308,
    ImageSparseSampleProjImplicitLod = 309,
    ImageSparseSampleProjExplicitLod = 310,
    ImageSparseSampleProjDrefImplicitLod = 311,
    ImageSparseSampleProjDrefExplicitLod = 312,
    ImageSparseFetch = 313,
    ImageSparseGather = 314,
    ImageSparseDrefGather = 315,
    ImageSparseTexelsResident = 316,
    NoLine = 317,
    AtomicFlagTestAndSet = 318,
    AtomicFlagClear = 319,
    ImageSparseRead = 320,
}

impl Op {
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0 => Some(Op::Nop),
            1 => Some(Op::Undef),
            2 => Some(Op::SourceContinued),
            3 => Some(Op::Source),
            4 => Some(Op::SourceExtension),
            5 => Some(Op::Name),
            6 => Some(Op::MemberName),
            7 => Some(Op::String),
            8 => Some(Op::Line),
            10 => Some(Op::Extension),
            11 => Some(Op::ExtInstImport),
            12 => Some(Op::ExtInst),
            14 => Some(Op::MemoryModel),
            15 => Some(Op::EntryPoint),
            16 => Some(Op::ExecutionMode),
            17 => Some(Op::Capability),
            19 => Some(Op::TypeVoid),
            20 => Some(Op::TypeBool),
            21 => Some(Op::TypeInt),
            22 => Some(Op::TypeFloat),
            23 => Some(Op::TypeVector),
            24 => Some(Op::TypeMatrix),
            25 => Some(Op::TypeImage),
            26 => Some(Op::TypeSampler),
            27 => Some(Op::TypeSampledImage),
            28 => Some(Op::TypeArray),
            29 => Some(Op::TypeRuntimeArray),
            30 => Some(Op::TypeStruct),
            31 => Some(Op::TypeOpaque),
            32 => Some(Op::TypePointer),
            33 => Some(Op::TypeFunction),
            34 => Some(Op::TypeEvent),
            35 => Some(Op::TypeDeviceEvent),
            36 => Some(Op::TypeReserveId),
            37 => Some(Op::TypeQueue),
            38 => Some(Op::TypePipe),
            39 => Some(Op::TypeForwardPointer),
            41 => Some(Op::ConstantTrue),
            42 => Some(Op::ConstantFalse),
            43 => Some(Op::Constant),
            44 => Some(Op::ConstantComposite),
            45 => Some(Op::ConstantSampler),
            46 => Some(Op::ConstantNull),
            48 => Some(Op::SpecConstantTrue),
            49 => Some(Op::SpecConstantFalse),
            50 => Some(Op::SpecConstant),
            51 => Some(Op::SpecConstantComposite),
            52 => Some(Op::SpecConstantOp),
            54 => Some(Op::Function),
            55 => Some(Op::FunctionParameter),
            56 => Some(Op::FunctionEnd),
            57 => Some(Op::FunctionCall),
            59 => Some(Op::Variable),
            60 => Some(Op::ImageTexelPointer),
            61 => Some(Op::Load),
            62 => Some(Op::Store),
            63 => Some(Op::CopyMemory),
            64 => Some(Op::CopyMemorySized),
            65 => Some(Op::AccessChain),
            66 => Some(Op::InBoundsAccessChain),
            67 => Some(Op::PtrAccessChain),
            68 => Some(Op::ArrayLength),
            69 => Some(Op::GenericPtrMemSemantics),
            70 => Some(Op::InBoundsPtrAccessChain),
            71 => Some(Op::Decorate),
            72 => Some(Op::MemberDecorate),
            73 => Some(Op::DecorationGroup),
            74 => Some(Op::GroupDecorate),
            75 => Some(Op::GroupMemberDecorate),
            77 => Some(Op::VectorExtractDynamic),
            78 => Some(Op::VectorInsertDynamic),
            79 => Some(Op::VectorShuffle),
            80 => Some(Op::CompositeConstruct),
            81 => Some(Op::CompositeExtract),
            82 => Some(Op::CompositeInsert),
            83 => Some(Op::CopyObject),
            84 => Some(Op::Transpose),
            86 => Some(Op::SampledImage),
            87 => Some(Op::ImageSampleImplicitLod),
            88 => Some(Op::ImageSampleExplicitLod),
            89 => Some(Op::ImageSampleDrefImplicitLod),
            90 => Some(Op::ImageSampleDrefExplicitLod),
            91 => Some(Op::ImageSampleProjImplicitLod),
            92 => Some(Op::ImageSampleProjExplicitLod),
            93 => Some(Op::ImageSampleProjDrefImplicitLod),
            94 => Some(Op::ImageSampleProjDrefExplicitLod),
            95 => Some(Op::ImageFetch),
            96 => Some(Op::ImageGather),
            97 => Some(Op::ImageDrefGather),
            98 => Some(Op::ImageRead),
            99 => Some(Op::ImageWrite),
            100 => Some(Op::Image),
            101 => Some(Op::ImageQueryFormat),
            102 => Some(Op::ImageQueryOrder),
            103 => Some(Op::ImageQuerySizeLod),
            104 => Some(Op::ImageQuerySize),
            105 => Some(Op::ImageQueryLod),
            106 => Some(Op::ImageQueryLevels),
            107 => Some(Op::ImageQuerySamples),
            109 => Some(Op::ConvertFToU),
            110 => Some(Op::ConvertFToS),
            111 => Some(Op::ConvertSToF),
            112 => Some(Op::ConvertUToF),
            113 => Some(Op::UConvert),
            114 => Some(Op::SConvert),
            115 => Some(Op::FConvert),
            116 => Some(Op::QuantizeToF16),
            117 => Some(Op::ConvertPtrToU),
            118 => Some(Op::SatConvertSToU),
            119 => Some(Op::SatConvertUToS),
            120 => Some(Op::ConvertUToPtr),
            121 => Some(Op::PtrCastToGeneric),
            122 => Some(Op::GenericCastToPtr),
            123 => Some(Op::GenericCastToPtrExplicit),
            124 => Some(Op::Bitcast),
            126 => Some(Op::SNegate),
            127 => Some(Op::FNegate),
            128 => Some(Op::IAdd),
            129 => Some(Op::FAdd),
            130 => Some(Op::ISub),
            131 => Some(Op::FSub),
            132 => Some(Op::IMul),
            133 => Some(Op::FMul),
            134 => Some(Op::UDiv),
            135 => Some(Op::SDiv),
            136 => Some(Op::FDiv),
            137 => Some(Op::UMod),
            138 => Some(Op::SRem),
            139 => Some(Op::SMod),
            140 => Some(Op::FRem),
            141 => Some(Op::FMod),
            142 => Some(Op::VectorTimesScalar),
            143 => Some(Op::MatrixTimesScalar),
            144 => Some(Op::VectorTimesMatrix),
            145 => Some(Op::MatrixTimesVector),
            146 => Some(Op::MatrixTimesMatrix),
            147 => Some(Op::OuterProduct),
            148 => Some(Op::Dot),
            149 => Some(Op::IAddCarry),
            150 => Some(Op::ISubBorrow),
            151 => Some(Op::UMulExtended),
            152 => Some(Op::SMulExtended),
            154 => Some(Op::Any),
            155 => Some(Op::All),
            156 => Some(Op::IsNan),
            157 => Some(Op::IsInf),
            158 => Some(Op::IsFinite),
            159 => Some(Op::IsNormal),
            160 => Some(Op::SignBitSet),
            161 => Some(Op::LessOrGreater),
            162 => Some(Op::Ordered),
            163 => Some(Op::Unordered),
            164 => Some(Op::LogicalEqual),
            165 => Some(Op::LogicalNotEqual),
            166 => Some(Op::LogicalOr),
            167 => Some(Op::LogicalAnd),
            168 => Some(Op::LogicalNot),
            169 => Some(Op::Select),
            170 => Some(Op::IEqual),
            171 => Some(Op::INotEqual),
            172 => Some(Op::UGreaterThan),
            173 => Some(Op::SGreaterThan),
            174 => Some(Op::UGreaterThanEqual),
            175 => Some(Op::SGreaterThanEqual),
            176 => Some(Op::ULessThan),
            177 => Some(Op::SLessThan),
            178 => Some(Op::ULessThanEqual),
            179 => Some(Op::SLessThanEqual),
            180 => Some(Op::FOrdEqual),
            181 => Some(Op::FUnordEqual),
            182 => Some(Op::FOrdNotEqual),
            183 => Some(Op::FUnordNotEqual),
            184 => Some(Op::FOrdLessThan),
            185 => Some(Op::FUnordLessThan),
            186 => Some(Op::FOrdGreaterThan),
            187 => Some(Op::FUnordGreaterThan),
            188 => Some(Op::FOrdLessThanEqual),
            189 => Some(Op::FUnordLessThanEqual),
            190 => Some(Op::FOrdGreaterThanEqual),
            191 => Some(Op::FUnordGreaterThanEqual),
            194 => Some(Op::ShiftRightLogical),
            195 => Some(Op::ShiftRightArithmetic),
            196 => Some(Op::ShiftLeftLogical),
            197 => Some(Op::BitwiseOr),
            198 => Some(Op::BitwiseXor),
            199 => Some(Op::BitwiseAnd),
            200 => Some(Op::Not),
            201 => Some(Op::BitFieldInsert),
            202 => Some(Op::BitFieldSExtract),
            203 => Some(Op::BitFieldUExtract),
            204 => Some(Op::BitReverse),
            205 => Some(Op::BitCount),
            207 => Some(Op::DPdx),
            208 => Some(Op::DPdy),
            209 => Some(Op::Fwidth),
            210 => Some(Op::DPdxFine),
            211 => Some(Op::DPdyFine),
            212 => Some(Op::FwidthFine),
            213 => Some(Op::DPdxCoarse),
            214 => Some(Op::DPdyCoarse),
            215 => Some(Op::FwidthCoarse),
            218 => Some(Op::EmitVertex),
            219 => Some(Op::EndPrimitive),
            220 => Some(Op::EmitStreamVertex),
            221 => Some(Op::EndStreamPrimitive),
            224 => Some(Op::ControlBarrier),
            225 => Some(Op::MemoryBarrier),
            227 => Some(Op::AtomicLoad),
            228 => Some(Op::AtomicStore),
            229 => Some(Op::AtomicExchange),
            230 => Some(Op::AtomicCompareExchange),
            231 => Some(Op::AtomicCompareExchangeWeak),
            232 => Some(Op::AtomicIIncrement),
            233 => Some(Op::AtomicIDecrement),
            234 => Some(Op::AtomicIAdd),
            235 => Some(Op::AtomicISub),
            236 => Some(Op::AtomicSMin),
            237 => Some(Op::AtomicUMin),
            238 => Some(Op::AtomicSMax),
            239 => Some(Op::AtomicUMax),
            240 => Some(Op::AtomicAnd),
            241 => Some(Op::AtomicOr),
            242 => Some(Op::AtomicXor),
            245 => Some(Op::Phi),
            246 => Some(Op::LoopMerge),
            247 => Some(Op::SelectionMerge),
            248 => Some(Op::Label),
            249 => Some(Op::Branch),
            250 => Some(Op::BranchConditional),
            251 => Some(Op::Switch),
            252 => Some(Op::Kill),
            253 => Some(Op::Return),
            254 => Some(Op::ReturnValue),
            255 => Some(Op::Unreachable),
            256 => Some(Op::LifetimeStart),
            257 => Some(Op::LifetimeStop),
            259 => Some(Op::GroupAsyncCopy),
            260 => Some(Op::GroupWaitEvents),
            261 => Some(Op::GroupAll),
            262 => Some(Op::GroupAny),
            263 => Some(Op::GroupBroadcast),
            264 => Some(Op::GroupIAdd),
            265 => Some(Op::GroupFAdd),
            266 => Some(Op::GroupFMin),
            267 => Some(Op::GroupUMin),
            268 => Some(Op::GroupSMin),
            269 => Some(Op::GroupFMax),
            270 => Some(Op::GroupUMax),
            271 => Some(Op::GroupSMax),
            274 => Some(Op::ReadPipe),
            275 => Some(Op::WritePipe),
            276 => Some(Op::ReservedReadPipe),
            277 => Some(Op::ReservedWritePipe),
            278 => Some(Op::ReserveReadPipePackets),
            279 => Some(Op::ReserveWritePipePackets),
            280 => Some(Op::CommitReadPipe),
            281 => Some(Op::CommitWritePipe),
            282 => Some(Op::IsValidReserveId),
            283 => Some(Op::GetNumPipePackets),
            284 => Some(Op::GetMaxPipePackets),
            285 => Some(Op::GroupReserveReadPipePackets),
            286 => Some(Op::GroupReserveWritePipePackets),
            287 => Some(Op::GroupCommitReadPipe),
            288 => Some(Op::GroupCommitWritePipe),
            291 => Some(Op::EnqueueMarker),
            292 => Some(Op::EnqueueKernel),
            293 => Some(Op::GetKernelNDrangeSubGroupCount),
            294 => Some(Op::GetKernelNDrangeMaxSubGroupSize),
            295 => Some(Op::GetKernelWorkGroupSize),
            296 => Some(Op::GetKernelPreferredWorkGroupSizeMultiple),
            297 => Some(Op::RetainEvent),
            298 => Some(Op::ReleaseEvent),
            299 => Some(Op::CreateUserEvent),
            300 => Some(Op::IsValidEvent),
            301 => Some(Op::SetUserEventStatus),
            302 => Some(Op::CaptureEventProfilingInfo),
            303 => Some(Op::GetDefaultQueue),
            304 => Some(Op::BuildNDRange),
            305 => Some(Op::ImageSparseSampleImplicitLod),
            306 => Some(Op::ImageSparseSampleExplicitLod),
            307 => Some(Op::ImageSparseSampleDrefImplicitLod),
            308 => Some(Op::ImageSparseSampleDrefExplicitLod),
            309 => Some(Op::ImageSparseSampleProjImplicitLod),
            310 => Some(Op::ImageSparseSampleProjExplicitLod),
            311 => Some(Op::ImageSparseSampleProjDrefImplicitLod),
            312 => Some(Op::ImageSparseSampleProjDrefExplicitLod),
            313 => Some(Op::ImageSparseFetch),
            314 => Some(Op::ImageSparseGather),
            315 => Some(Op::ImageSparseDrefGather),
            316 => Some(Op::ImageSparseTexelsResident),
            317 => Some(Op::NoLine),
            318 => Some(Op::AtomicFlagTestAndSet),
            319 => Some(Op::AtomicFlagClear),
            320 => Some(Op::ImageSparseRead),
            _ => None,
        }
    }

    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Mnemonic used by disassemblers, e.g. `OpIAdd`
    pub fn name(&self) -> &'static str {
        match self {
            Op::Nop => "OpNop",
            Op::Undef => "OpUndef",
            Op::SourceContinued => "OpSourceContinued",
            Op::Source => "OpSource",
            Op::SourceExtension => "OpSourceExtension",
            Op::Name => "OpName",
            Op::MemberName => "OpMemberName",
            Op::String => "OpString",
            Op::Line => "OpLine",
            Op::Extension => "OpExtension",
            Op::ExtInstImport => "OpExtInstImport",
            Op::ExtInst => "OpExtInst",
            Op::MemoryModel => "OpMemoryModel",
            Op::EntryPoint => "OpEntryPoint",
            Op::ExecutionMode => "OpExecutionMode",
            Op::Capability => "OpCapability",
            Op::TypeVoid => "OpTypeVoid",
            Op::TypeBool => "OpTypeBool",
            Op::TypeInt => "OpTypeInt",
            Op::TypeFloat => "OpTypeFloat",
            Op::TypeVector => "OpTypeVector",
            Op::TypeMatrix => "OpTypeMatrix",
            Op::TypeImage => "OpTypeImage",
            Op::TypeSampler => "OpTypeSampler",
            Op::TypeSampledImage => "OpTypeSampledImage",
            Op::TypeArray => "OpTypeArray",
            Op::TypeRuntimeArray => "OpTypeRuntimeArray",
            Op::TypeStruct => "OpTypeStruct",
            Op::TypeOpaque => "OpTypeOpaque",
            Op::TypePointer => "OpTypePointer",
            Op::TypeFunction => "OpTypeFunction",
            Op::TypeEvent => "OpTypeEvent",
            Op::TypeDeviceEvent => "OpTypeDeviceEvent",
            Op::TypeReserveId => "OpTypeReserveId",
            Op::TypeQueue => "OpTypeQueue",
            Op::TypePipe => "OpTypePipe",
            Op::TypeForwardPointer => "OpTypeForwardPointer",
            Op::ConstantTrue => "OpConstantTrue",
            Op::ConstantFalse => "OpConstantFalse",
            Op::Constant => "OpConstant",
            Op::ConstantComposite => "OpConstantComposite",
            Op::ConstantSampler => "OpConstantSampler",
            Op::ConstantNull => "OpConstantNull",
            Op::SpecConstantTrue => "OpSpecConstantTrue",
            Op::SpecConstantFalse => "OpSpecConstantFalse",
            Op::SpecConstant => "OpSpecConstant",
            Op::SpecConstantComposite => "OpSpecConstantComposite",
            Op::SpecConstantOp => "OpSpecConstantOp",
            Op::Function => "OpFunction",
            Op::FunctionParameter => "OpFunctionParameter",
            Op::FunctionEnd => "OpFunctionEnd",
            Op::FunctionCall => "OpFunctionCall",
            Op::Variable => "OpVariable",
            Op::ImageTexelPointer => "OpImageTexelPointer",
            Op::Load => "OpLoad",
            Op::Store => "OpStore",
            Op::CopyMemory => "OpCopyMemory",
            Op::CopyMemorySized => "OpCopyMemorySized",
            Op::AccessChain => "OpAccessChain",
            Op::InBoundsAccessChain => "OpInBoundsAccessChain",
            Op::PtrAccessChain => "OpPtrAccessChain",
            Op::ArrayLength => "OpArrayLength",
            Op::GenericPtrMemSemantics => "OpGenericPtrMemSemantics",
            Op::InBoundsPtrAccessChain => "OpInBoundsPtrAccessChain",
            Op::Decorate => "OpDecorate",
            Op::MemberDecorate => "OpMemberDecorate",
            Op::DecorationGroup => "OpDecorationGroup",
            Op::GroupDecorate => "OpGroupDecorate",
            Op::GroupMemberDecorate => "OpGroupMemberDecorate",
            Op::VectorExtractDynamic => "OpVectorExtractDynamic",
            Op::VectorInsertDynamic => "OpVectorInsertDynamic",
            Op::VectorShuffle => "OpVectorShuffle",
            Op::CompositeConstruct => "OpCompositeConstruct",
            Op::CompositeExtract => "OpCompositeExtract",
            Op::CompositeInsert => "OpCompositeInsert",
            Op::CopyObject => "OpCopyObject",
            Op::Transpose => "OpTranspose",
            Op::SampledImage => "OpSampledImage",
            Op::ImageSampleImplicitLod => "OpImageSampleImplicitLod",
            Op::ImageSampleExplicitLod => "OpImageSampleExplicitLod",
            Op::ImageSampleDrefImplicitLod => "OpImageSampleDrefImplicitLod",
            Op::ImageSampleDrefExplicitLod => "OpImageSampleDrefExplicitLod",
            Op::ImageSampleProjImplicitLod => "OpImageSampleProjImplicitLod",
            Op::ImageSampleProjExplicitLod => "OpImageSampleProjExplicitLod",
            Op::ImageSampleProjDrefImplicitLod => "OpImageSampleProjDrefImplicitLod",
            Op::ImageSampleProjDrefExplicitLod => "OpImageSampleProjDrefExplicitLod",
            Op::ImageFetch => "OpImageFetch",
            Op::ImageGather => "OpImageGather",
            Op::ImageDrefGather => "OpImageDrefGather",
            Op::ImageRead => "OpImageRead",
            Op::ImageWrite => "OpImageWrite",
            Op::Image => "OpImage",
            Op::ImageQueryFormat => "OpImageQueryFormat",
            Op::ImageQueryOrder => "OpImageQueryOrder",
            Op::ImageQuerySizeLod => "OpImageQuerySizeLod",
            Op::ImageQuerySize => "OpImageQuerySize",
            Op::ImageQueryLod => "OpImageQueryLod",
            Op::ImageQueryLevels => "OpImageQueryLevels",
            Op::ImageQuerySamples => "OpImageQuerySamples",
            Op::ConvertFToU => "OpConvertFToU",
            Op::ConvertFToS => "OpConvertFToS",
            Op::ConvertSToF => "OpConvertSToF",
            Op::ConvertUToF => "OpConvertUToF",
            Op::UConvert => "OpUConvert",
            Op::SConvert => "OpSConvert",
            Op::FConvert => "OpFConvert",
            Op::QuantizeToF16 => "OpQuantizeToF16",
            Op::ConvertPtrToU => "OpConvertPtrToU",
            Op::SatConvertSToU => "OpSatConvertSToU",
            Op::SatConvertUToS => "OpSatConvertUToS",
            Op::ConvertUToPtr => "OpConvertUToPtr",
            Op::PtrCastToGeneric => "OpPtrCastToGeneric",
            Op::GenericCastToPtr => "OpGenericCastToPtr",
            Op::GenericCastToPtrExplicit => "OpGenericCastToPtrExplicit",
            Op::Bitcast => "OpBitcast",
            Op::SNegate => "OpSNegate",
            Op::FNegate => "OpFNegate",
            Op::IAdd => "OpIAdd",
            Op::FAdd => "OpFAdd",
            Op::ISub => "OpISub",
            Op::FSub => "OpFSub",
            Op::IMul => "OpIMul",
            Op::FMul => "OpFMul",
            Op::UDiv => "OpUDiv",
            Op::SDiv => "OpSDiv",
            Op::FDiv => "OpFDiv",
            Op::UMod => "OpUMod",
            Op::SRem => "OpSRem",
            Op::SMod => "OpSMod",
            Op::FRem => "OpFRem",
            Op::FMod => "OpFMod",
            Op::VectorTimesScalar => "OpVectorTimesScalar",
            Op::MatrixTimesScalar => "OpMatrixTimesScalar",
            Op::VectorTimesMatrix => "OpVectorTimesMatrix",
            Op::MatrixTimesVector => "OpMatrixTimesVector",
            Op::MatrixTimesMatrix => "OpMatrixTimesMatrix",
            Op::OuterProduct => "OpOuterProduct",
            Op::Dot => "OpDot",
            Op::IAddCarry => "OpIAddCarry",
            Op::ISubBorrow => "OpISubBorrow",
            Op::UMulExtended => "OpUMulExtended",
            Op::SMulExtended => "OpSMulExtended",
            Op::Any => "OpAny",
            Op::All => "OpAll",
            Op::IsNan => "OpIsNan",
            Op::IsInf => "OpIsInf",
            Op::IsFinite => "OpIsFinite",
            Op::IsNormal => "OpIsNormal",
            Op::SignBitSet => "OpSignBitSet",
            Op::LessOrGreater => "OpLessOrGreater",
            Op::Ordered => "OpOrdered",
            Op::Unordered => "OpUnordered",
            Op::LogicalEqual => "OpLogicalEqual",
            Op::LogicalNotEqual => "OpLogicalNotEqual",
            Op::LogicalOr => "OpLogicalOr",
            Op::LogicalAnd => "OpLogicalAnd",
            Op::LogicalNot => "OpLogicalNot",
            Op::Select => "OpSelect",
            Op::IEqual => "OpIEqual",
            Op::INotEqual => "OpINotEqual",
            Op::UGreaterThan => "OpUGreaterThan",
            Op::SGreaterThan => "OpSGreaterThan",
            Op::UGreaterThanEqual => "OpUGreaterThanEqual",
            Op::SGreaterThanEqual => "OpSGreaterThanEqual",
            Op::ULessThan => "OpULessThan",
            Op::SLessThan => "OpSLessThan",
            Op::ULessThanEqual => "OpULessThanEqual",
            Op::SLessThanEqual => "OpSLessThanEqual",
            Op::FOrdEqual => "OpFOrdEqual",
            Op::FUnordEqual => "OpFUnordEqual",
            Op::FOrdNotEqual => "OpFOrdNotEqual",
            Op::FUnordNotEqual => "OpFUnordNotEqual",
            Op::FOrdLessThan => "OpFOrdLessThan",
            Op::FUnordLessThan => "OpFUnordLessThan",
            Op::FOrdGreaterThan => "OpFOrdGreaterThan",
            Op::FUnordGreaterThan => "OpFUnordGreaterThan",
            Op::FOrdLessThanEqual => "OpFOrdLessThanEqual",
            Op::FUnordLessThanEqual => "OpFUnordLessThanEqual",
            Op::FOrdGreaterThanEqual => "OpFOrdGreaterThanEqual",
            Op::FUnordGreaterThanEqual => "OpFUnordGreaterThanEqual",
            Op::ShiftRightLogical => "OpShiftRightLogical",
            Op::ShiftRightArithmetic => "OpShiftRightArithmetic",
            Op::ShiftLeftLogical => "OpShiftLeftLogical",
            Op::BitwiseOr => "OpBitwiseOr",
            Op::BitwiseXor => "OpBitwiseXor",
            Op::BitwiseAnd => "OpBitwiseAnd",
            Op::Not => "OpNot",
            Op::BitFieldInsert => "OpBitFieldInsert",
            Op::BitFieldSExtract => "OpBitFieldSExtract",
            Op::BitFieldUExtract => "OpBitFieldUExtract",
            Op::BitReverse => "OpBitReverse",
            Op::BitCount => "OpBitCount",
            Op::DPdx => "OpDPdx",
            Op::DPdy => "OpDPdy",
            Op::Fwidth => "OpFwidth",
            Op::DPdxFine => "OpDPdxFine",
            Op::DPdyFine => "OpDPdyFine",
            Op::FwidthFine => "OpFwidthFine",
            Op::DPdxCoarse => "OpDPdxCoarse",
            Op::DPdyCoarse => "OpDPdyCoarse",
            Op::FwidthCoarse => "OpFwidthCoarse",
            Op::EmitVertex => "OpEmitVertex",
            Op::EndPrimitive => "OpEndPrimitive",
            Op::EmitStreamVertex => "OpEmitStreamVertex",
            Op::EndStreamPrimitive => "OpEndStreamPrimitive",
            Op::ControlBarrier => "OpControlBarrier",
            Op::MemoryBarrier => "OpMemoryBarrier",
            Op::AtomicLoad => "OpAtomicLoad",
            Op::AtomicStore => "OpAtomicStore",
            Op::AtomicExchange => "OpAtomicExchange",
            Op::AtomicCompareExchange => "OpAtomicCompareExchange",
            Op::AtomicCompareExchangeWeak => "OpAtomicCompareExchangeWeak",
            Op::AtomicIIncrement => "OpAtomicIIncrement",
            Op::AtomicIDecrement => "OpAtomicIDecrement",
            Op::AtomicIAdd => "OpAtomicIAdd",
            Op::AtomicISub => "OpAtomicISub",
            Op::AtomicSMin => "OpAtomicSMin",
            Op::AtomicUMin => "OpAtomicUMin",
            Op::AtomicSMax => "OpAtomicSMax",
            Op::AtomicUMax => "OpAtomicUMax",
            Op::AtomicAnd => "OpAtomicAnd",
            Op::AtomicOr => "OpAtomicOr",
            Op::AtomicXor => "OpAtomicXor",
            Op::Phi => "OpPhi",
            Op::LoopMerge => "OpLoopMerge",
            Op::SelectionMerge => "OpSelectionMerge",
            Op::Label => "OpLabel",
            Op::Branch => "OpBranch",
            Op::BranchConditional => "OpBranchConditional",
            Op::Switch => "OpSwitch",
            Op::Kill => "OpKill",
            Op::Return => "OpReturn",
            Op::ReturnValue => "OpReturnValue",
            Op::Unreachable => "OpUnreachable",
            Op::LifetimeStart => "OpLifetimeStart",
            Op::LifetimeStop => "OpLifetimeStop",
            Op::GroupAsyncCopy => "OpGroupAsyncCopy",
            Op::GroupWaitEvents => "OpGroupWaitEvents",
            Op::GroupAll => "OpGroupAll",
            Op::GroupAny => "OpGroupAny",
            Op::GroupBroadcast => "OpGroupBroadcast",
            Op::GroupIAdd => "OpGroupIAdd",
            Op::GroupFAdd => "OpGroupFAdd",
            Op::GroupFMin => "OpGroupFMin",
            Op::GroupUMin => "OpGroupUMin",
            Op::GroupSMin => "OpGroupSMin",
            Op::GroupFMax => "OpGroupFMax",
            Op::GroupUMax => "OpGroupUMax",
            Op::GroupSMax => "OpGroupSMax",
            Op::ReadPipe => "OpReadPipe",
            Op::WritePipe => "OpWritePipe",
            Op::ReservedReadPipe => "OpReservedReadPipe",
            Op::ReservedWritePipe => "OpReservedWritePipe",
            Op::ReserveReadPipePackets => "OpReserveReadPipePackets",
            Op::ReserveWritePipePackets => "OpReserveWritePipePackets",
            Op::CommitReadPipe => "OpCommitReadPipe",
            Op::CommitWritePipe => "OpCommitWritePipe",
            Op::IsValidReserveId => "OpIsValidReserveId",
            Op::GetNumPipePackets => "OpGetNumPipePackets",
            Op::GetMaxPipePackets => "OpGetMaxPipePackets",
            Op::GroupReserveReadPipePackets => "OpGroupReserveReadPipePackets",
            Op::GroupReserveWritePipePackets => "OpGroupReserveWritePipePackets",
            Op::GroupCommitReadPipe => "OpGroupCommitReadPipe",
            Op::GroupCommitWritePipe => "OpGroupCommitWritePipe",
            Op::EnqueueMarker => "OpEnqueueMarker",
            Op::EnqueueKernel => "OpEnqueueKernel",
            Op::GetKernelNDrangeSubGroupCount => "OpGetKernelNDrangeSubGroupCount",
            Op::GetKernelNDrangeMaxSubGroupSize => "OpGetKernelNDrangeMaxSubGroupSize",
            Op::GetKernelWorkGroupSize => "OpGetKernelWorkGroupSize",
            Op::GetKernelPreferredWorkGroupSizeMultiple => "OpGetKernelPreferredWorkGroupSizeMultiple",
            Op::RetainEvent => "OpRetainEvent",
            Op::ReleaseEvent => "OpReleaseEvent",
            Op::CreateUserEvent => "OpCreateUserEvent",
            Op::IsValidEvent => "OpIsValidEvent",
            Op::SetUserEventStatus => "OpSetUserEventStatus",
            Op::CaptureEventProfilingInfo => "OpCaptureEventProfilingInfo",
            Op::GetDefaultQueue => "OpGetDefaultQueue",
            Op::BuildNDRange => "OpBuildNDRange",
            Op::ImageSparseSampleImplicitLod => "OpImageSparseSampleImplicitLod",
            Op::ImageSparseSampleExplicitLod => "OpImageSparseSampleExplicitLod",
            Op::ImageSparseSampleDrefImplicitLod => "OpImageSparseSampleDrefImplicitLod",
            Op::ImageSparseSampleDrefExplicitLod => "OpImageSparseSampleDrefExplicitLod",
            Op::ImageSparseSampleProjImplicitLod => "OpImageSparseSampleProjImplicitLod",
            Op::ImageSparseSampleProjExplicitLod => "OpImageSparseSampleProjExplicitLod",
            Op::ImageSparseSampleProjDrefImplicitLod => "OpImageSparseSampleProjDrefImplicitLod",
            Op::ImageSparseSampleProjDrefExplicitLod => "OpImageSparseSampleProjDrefExplicitLod",
            Op::ImageSparseFetch => "OpImageSparseFetch",
            Op::ImageSparseGather => "OpImageSparseGather",
            Op::ImageSparseDrefGather => "OpImageSparseDrefGather",
            Op::ImageSparseTexelsResident => "OpImageSparseTexelsResident",
            Op::NoLine => "OpNoLine",
            Op::AtomicFlagTestAndSet => "OpAtomicFlagTestAndSet",
            Op::AtomicFlagClear => "OpAtomicFlagClear",
            Op::ImageSparseRead => "OpImageSparseRead",
        }
    }

    /// Ends a block's control flow. A block ending in `OpUnreachable` is
    /// still considered open.
    pub fn is_terminator(&self) -> bool {
        matches!(
            self,
            Op::Branch | Op::BranchConditional | Op::Switch | Op::Kill | Op::Return | Op::ReturnValue
        )
    }

    /// Structured-control-flow markers that must stay directly in front of
    /// the terminator they annotate
    pub fn is_merge(&self) -> bool {
        matches!(self, Op::LoopMerge | Op::SelectionMerge)
    }
}

impl TryFrom<u16> for Op {
    type Error = IrError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Op::from_u16(value).ok_or(IrError::UnknownOpcode(value))
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Storage class operand of pointer types and variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum StorageClass {
    UniformConstant = 0,
    Input = 1,
    Uniform = 2,
    Output = 3,
    Workgroup = 4,
    CrossWorkgroup = 5,
    Private = 6,
    Function = 7,
    Generic = 8,
    PushConstant = 9,
    AtomicCounter = 10,
    Image = 11,
    StorageBuffer = 12,
}

impl StorageClass {
    pub fn from_u32(value: Word) -> Option<Self> {
        match value {
            0 => Some(StorageClass::UniformConstant),
            1 => Some(StorageClass::Input),
            2 => Some(StorageClass::Uniform),
            3 => Some(StorageClass::Output),
            4 => Some(StorageClass::Workgroup),
            5 => Some(StorageClass::CrossWorkgroup),
            6 => Some(StorageClass::Private),
            7 => Some(StorageClass::Function),
            8 => Some(StorageClass::Generic),
            9 => Some(StorageClass::PushConstant),
            10 => Some(StorageClass::AtomicCounter),
            11 => Some(StorageClass::Image),
            12 => Some(StorageClass::StorageBuffer),
            _ => None,
        }
    }

    pub fn as_word(self) -> Word {
        self as Word
    }
}

impl fmt::Display for StorageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Function-control mask carried as the first operand of `OpFunction`
pub struct FunctionControl;

impl FunctionControl {
    pub const NONE: Word = 0x0;
    pub const INLINE: Word = 0x1;
    pub const DONT_INLINE: Word = 0x2;
    pub const PURE: Word = 0x4;
    pub const CONST: Word = 0x8;
}
