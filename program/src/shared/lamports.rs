use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};

/// Drains every lamport from `source` into `destination`, leaving `source` for the runtime to
/// reap at the end of the transaction.
pub fn relocate_all_lamports(source: &AccountInfo, destination: &AccountInfo) -> ProgramResult {
    let amount = source.lamports();

    {
        let mut source_lamports = source.try_borrow_mut_lamports()?;
        *source_lamports = 0;
    }

    {
        let mut destination_lamports = destination.try_borrow_mut_lamports()?;
        *destination_lamports = destination_lamports
            .checked_add(amount)
            .ok_or(ProgramError::ArithmeticOverflow)?;
    }

    Ok(())
}
