use super::*;

#[test]
fn parse_args_counts() -> AppResult<()> {
    let args = parse(&["-u", "http://localhost", "-s", "25", "-r", "4"])?;
    if args.users != Some(RunCount::Bounded(25)) {
        return Err(AppError::validation("Unexpected users"));
    }
    if args.repetitions != Some(RunCount::Bounded(4)) {
        return Err(AppError::validation("Unexpected repetitions"));
    }
    Ok(())
}

#[test]
fn parse_args_minus_one_is_unbounded() -> AppResult<()> {
    let args = parse(&["-u", "http://localhost", "--users", "-1", "--reps", "-1"])?;
    let users = args
        .users
        .ok_or_else(|| AppError::validation("Expected users"))?;
    let repetitions = args
        .repetitions
        .ok_or_else(|| AppError::validation("Expected repetitions"))?;
    if !users.is_unbounded() || !repetitions.is_unbounded() {
        return Err(AppError::validation("Expected unbounded counts"));
    }
    if users.get() != 9_223_372_036_854_775_807 || repetitions.get() != MAX_RUN_COUNT {
        return Err(AppError::validation(format!(
            "Unexpected resolved counts: {} {}",
            users.get(),
            repetitions.get()
        )));
    }
    Ok(())
}

#[test]
fn parse_args_zero_count_is_allowed() -> AppResult<()> {
    let args = parse(&["-u", "http://localhost", "-r", "0"])?;
    if args.repetitions != Some(RunCount::Bounded(0)) {
        return Err(AppError::validation("Expected zero repetitions"));
    }
    Ok(())
}

#[test]
fn parse_args_rejects_other_negative_counts() -> AppResult<()> {
    let result = TesterArgs::try_parse_from(["stressi", "-u", "http://localhost", "-s", "-2"]);
    if result.is_ok() {
        return Err(AppError::validation("Expected -2 users to be rejected"));
    }
    let result = TesterArgs::try_parse_from(["stressi", "-u", "http://localhost", "-r", "ten"]);
    if result.is_ok() {
        return Err(AppError::validation("Expected non-numeric reps to be rejected"));
    }
    Ok(())
}

#[test]
fn run_count_display_uses_resolved_value() -> AppResult<()> {
    if RunCount::Bounded(7).to_string() != "7" {
        return Err(AppError::validation("Unexpected bounded display"));
    }
    if RunCount::Unbounded.to_string() != "9223372036854775807" {
        return Err(AppError::validation("Unexpected unbounded display"));
    }
    Ok(())
}
