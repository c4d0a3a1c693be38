//! Tests for the main control unit.

mod common;

use common::inst;
use riscv_pipeline::core::pipeline::control::{ControlUnit, InstClass};
use riscv_pipeline::core::pipeline::signals::*;
use riscv_pipeline::isa::InstructionBits;

fn decode(word: u32) -> ControlSignals {
    ControlUnit::decode(word.opcode(), word.funct3(), word.funct7())
}

fn class(word: u32) -> InstClass {
    InstClass::classify(word.opcode(), word.funct3(), word.funct7())
}

/// Tests register-register ALU control signals.
#[test]
fn test_control_reg_arith() {
    let ctrl = decode(inst().add(1, 2, 3).build());
    assert!(ctrl.reg_write);
    assert!(!ctrl.mem_read && !ctrl.mem_write && !ctrl.mem_to_reg);
    assert_eq!(ctrl.a_src, OpASrc::Reg1);
    assert_eq!(ctrl.b_src, OpBSrc::Reg2);
    assert_eq!(ctrl.alu_op, AluOpClass::RegArith);
    assert_eq!(ctrl.branch, BranchKind::None);
    assert_eq!(ctrl.jump, JumpKind::None);
}

/// Tests immediate ALU control signals.
#[test]
fn test_control_imm_arith() {
    let ctrl = decode(inst().addi(1, 2, -5).build());
    assert!(ctrl.reg_write);
    assert_eq!(ctrl.b_src, OpBSrc::Imm);
    assert_eq!(ctrl.alu_op, AluOpClass::ImmArith);
    assert_eq!(class(inst().srai(1, 2, 63).build()), InstClass::ImmArith);
    assert_eq!(class(inst().slli(1, 2, 33).build()), InstClass::ImmArith);
}

/// Tests load and store control signals.
#[test]
fn test_control_memory() {
    let ld = decode(inst().ld(5, 6, 8).build());
    assert!(ld.reg_write && ld.mem_read && ld.mem_to_reg);
    assert!(!ld.mem_write);
    assert_eq!(ld.b_src, OpBSrc::Imm);
    assert_eq!(ld.alu_op, AluOpClass::Add);

    let sd = decode(inst().sd(6, 5, 8).build());
    assert!(sd.mem_write);
    assert!(!sd.reg_write && !sd.mem_read);
    assert_eq!(sd.b_src, OpBSrc::Imm);
    assert_eq!(sd.alu_op, AluOpClass::Add);
}

/// Branches compare with SUB, SLT or SLTU and never write a register.
#[test]
fn test_control_branches() {
    let cases = [
        (inst().beq(1, 2, 8).build(), BranchKind::Beq, AluOpClass::Sub),
        (inst().bne(1, 2, 8).build(), BranchKind::Bne, AluOpClass::Sub),
        (inst().blt(1, 2, 8).build(), BranchKind::Blt, AluOpClass::Slt),
        (inst().bge(1, 2, 8).build(), BranchKind::Bge, AluOpClass::Slt),
        (inst().bltu(1, 2, 8).build(), BranchKind::Bltu, AluOpClass::Sltu),
        (inst().bgeu(1, 2, 8).build(), BranchKind::Bgeu, AluOpClass::Sltu),
    ];
    for (word, kind, op) in cases {
        let ctrl = decode(word);
        assert_eq!(ctrl.branch, kind);
        assert_eq!(ctrl.alu_op, op);
        assert!(!ctrl.reg_write);
        assert_eq!(ctrl.b_src, OpBSrc::Reg2);
    }
}

/// Tests upper-immediate and jump control signals.
#[test]
fn test_control_upper_and_jumps() {
    let lui = decode(inst().lui(1, 0x12345).build());
    assert_eq!((lui.a_src, lui.b_src), (OpASrc::Zero, OpBSrc::Imm));
    assert!(lui.reg_write);

    let auipc = decode(inst().auipc(1, 1).build());
    assert_eq!((auipc.a_src, auipc.b_src), (OpASrc::Pc, OpBSrc::Imm));

    let jal = decode(inst().jal(1, 16).build());
    assert_eq!(jal.jump, JumpKind::Jal);
    assert_eq!(jal.a_src, OpASrc::Pc);
    assert!(jal.reg_write);

    let jalr = decode(inst().jalr(1, 5, 4).build());
    assert_eq!(jalr.jump, JumpKind::Jalr);
    assert_eq!((jalr.a_src, jalr.b_src), (OpASrc::Reg1, OpBSrc::Imm));
    assert!(jalr.reg_write);
}

/// Tests Zba classification.
#[test]
fn test_control_zba() {
    for word in [
        inst().sh1add(1, 2, 3).build(),
        inst().sh2add(1, 2, 3).build(),
        inst().sh3add(1, 2, 3).build(),
    ] {
        assert_eq!(class(word), InstClass::Zba);
        assert_eq!(decode(word).alu_op, AluOpClass::Zba);
    }
    for word in [
        inst().add_uw(1, 2, 3).build(),
        inst().sh1add_uw(1, 2, 3).build(),
        inst().sh2add_uw(1, 2, 3).build(),
        inst().sh3add_uw(1, 2, 3).build(),
    ] {
        assert_eq!(class(word), InstClass::ZbaWord);
        assert_eq!(decode(word).alu_op, AluOpClass::ZbaWord);
        assert!(decode(word).reg_write);
    }
}

/// Unsupported encodings decode to the bubble bundle.
#[test]
fn test_control_unsupported_is_bubble() {
    let lw = inst().opcode(0x03).funct3(2).rd(1).rs1(2).build();
    let sw = inst().opcode(0x23).funct3(2).rs1(2).rs2(1).build();
    let mul = inst().opcode(0x33).funct7(0x01).rd(1).rs1(2).rs2(3).build();
    let addw = inst().opcode(0x3B).rd(1).rs1(2).rs2(3).build();
    let bad_branch = inst().opcode(0x63).funct3(2).build();
    let bad_jalr = inst().opcode(0x67).funct3(1).build();
    let bad_slli = inst().opcode(0x13).funct3(1).imm(0x400).build();
    let ecall = 0x0000_0073;

    for word in [0, lw, sw, mul, addw, bad_branch, bad_jalr, bad_slli, ecall] {
        assert_eq!(class(word), InstClass::Unsupported, "{:#010x}", word);
        let ctrl = decode(word);
        assert_eq!(ctrl, ControlSignals::BUBBLE);
        assert!(ctrl.is_bubble());
    }
}

/// Every supported class asserts at least one enable.
#[test]
fn test_control_supported_never_bubble() {
    for word in [
        inst().add(1, 2, 3).build(),
        inst().addi(1, 2, 3).build(),
        inst().ld(1, 2, 0).build(),
        inst().sd(1, 2, 0).build(),
        inst().beq(1, 2, 4).build(),
        inst().lui(1, 1).build(),
        inst().auipc(1, 1).build(),
        inst().jal(0, 8).build(),
        inst().jalr(0, 1, 0).build(),
        inst().sh2add(1, 2, 3).build(),
    ] {
        assert!(!decode(word).is_bubble(), "{:#010x}", word);
    }
}
