use pinocchio::account_info::AccountInfo;

/// The system program account. Always constructed unchecked here; the
/// CreateAccount CPI fails on anything but the real system program.
#[derive(Clone)]
pub struct SystemProgramInfo<'a> {
    pub info: &'a AccountInfo,
}

impl<'a> SystemProgramInfo<'a> {
    #[inline(always)]
    pub fn new_unchecked(info: &'a AccountInfo) -> SystemProgramInfo<'a> {
        SystemProgramInfo { info }
    }
}
