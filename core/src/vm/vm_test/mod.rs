pub(super) use crate::{
    error::{EastError, ErrorKind, Location, error_kind},
    val::{Mode, Val},
    vm::{Vm, VmConfig},
};

pub(super) struct Run {
    pub vm: Vm,
    pub out: Vec<u8>,
    pub result: anyhow::Result<()>,
}

impl Run {
    pub fn bytes(&self) -> Vec<u8> {
        self.vm.stack().as_slice().iter().map(Val::to_byte).collect()
    }

    pub fn vals(&self) -> Vec<Val> {
        self.vm.stack().as_slice().to_vec()
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    pub fn error(&self) -> &EastError {
        self.result
            .as_ref()
            .expect_err("program should fail")
            .downcast_ref::<EastError>()
            .expect("interpreter error")
    }
}

pub(super) fn run_with(config: VmConfig, program: &str, input: &str) -> Run {
    let mut vm = Vm::new(config);
    let mut out: Vec<u8> = Vec::new();
    let result = vm.exec(program.as_bytes(), input.as_bytes(), &mut out);
    Run { vm, out, result }
}

pub(super) fn run(program: &str, input: &str) -> Run {
    run_with(VmConfig::default(), program, input)
}

/// Run in byte mode and expect success.
pub(super) fn run_ok(program: &str, input: &str) -> Run {
    let run = run(program, input);
    if let Err(err) = &run.result {
        panic!("program {program:?} failed: {err}");
    }
    run
}

mod control_flow;
mod errors;
mod semantics;
