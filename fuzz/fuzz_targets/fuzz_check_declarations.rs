#![no_main]

use arbitrary::Arbitrary;
use grouped_property_order::*;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    groups: Vec<Vec<String>>,
    declarations: Vec<(String, u16)>,
    css_variables_first: bool,
    extended_hinting: bool,
    space_between_groups: bool,
    min_group_size: Option<u8>,
    max_no_space: Option<u8>,
}

fuzz_target!(|input: Input| {
    let groups: GroupTable = input
        .groups
        .into_iter()
        .take(16)
        .enumerate()
        .map(|(i, props)| (format!("g{}", i), GroupSpec::List(props)))
        .collect();
    let config = Config {
        css_variables_first: input.css_variables_first,
        extended_hinting: input.extended_hinting,
        space_between_groups: input.space_between_groups,
        min_group_size: input.min_group_size.map(usize::from),
        defaults: Some(GroupDefaults {
            space_around: None,
            max_no_space: input.max_no_space.map(usize::from),
        }),
        ..Config::with_groups(groups)
    };
    let Ok(linter) = compile(&config, &NoPresets) else {
        return;
    };

    let declarations: Vec<Declaration> = input
        .declarations
        .into_iter()
        .enumerate()
        .map(|(i, (property, line))| Declaration::new(property, usize::from(line), NodeId(i)))
        .collect();
    // at most one order and two spacing reports per declaration
    let report = linter.check_declarations(&declarations);
    assert!(report.violations.len() <= declarations.len() * 3);
});
