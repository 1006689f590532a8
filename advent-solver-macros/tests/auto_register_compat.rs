use advent_solver::{
    AocParser, AutoRegisterSolver, ParseError, RegistryBuilder, SolveError, Solver,
};

#[derive(AutoRegisterSolver)]
#[puzzle(year = 2030, day = 24, tags = ["test", "combined"])]
struct TaggedSolver;

impl AocParser for TaggedSolver {
    type SharedData = Vec<i32>;

    fn parse(input: &str) -> Result<Vec<i32>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl Solver for TaggedSolver {
    const PARTS: u8 = 2;

    fn solve_part(parsed: &mut Vec<i32>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(parsed.iter().sum::<i32>().to_string()),
            2 => Ok(parsed.iter().product::<i32>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[derive(AutoRegisterSolver)]
#[puzzle(year = 2030, day = 25)]
struct UntaggedSolver;

impl AocParser for UntaggedSolver {
    type SharedData = String;

    fn parse(input: &str) -> Result<String, ParseError> {
        Ok(input.to_string())
    }
}

impl Solver for UntaggedSolver {
    const PARTS: u8 = 1;

    fn solve_part(shared: &mut String, _part: u8) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn test_derived_solver_auto_registers() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let mut solver = registry
        .create_solver(2030, 24, "5\n6\n7")
        .expect("Failed to create solver - was it registered?");

    assert_eq!(solver.solve(1).expect("part 1").answer, "18");
    assert_eq!(solver.solve(2).expect("part 2").answer, "210");
}

#[test]
fn test_tags_are_carried_into_registry() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"combined"))
        .expect("Failed to register plugins")
        .build();

    let info = registry.get_info(2030, 24).expect("tagged solver registered");
    assert_eq!(info.tags, &["test", "combined"]);
    assert_eq!(info.parts, 2);
    assert!(!registry.contains(2030, 25), "untagged solver filtered out");
}

#[test]
fn test_untagged_solver_registers_with_empty_tags() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2030 && plugin.day == 25)
        .expect("Failed to register plugins")
        .build();

    let info = registry.get_info(2030, 25).expect("untagged solver registered");
    assert!(info.tags.is_empty());

    let mut solver = registry.create_solver(2030, 25, "abcd").expect("create");
    assert_eq!(solver.solve(1).expect("part 1").answer, "4");
}
