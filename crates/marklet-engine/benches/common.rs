/// Short phrases exercising each part of the dialect, with how many copies
/// make a realistic large document.
#[allow(dead_code)]
pub const FIXTURES: &[(&str, &str, usize)] = &[
    ("italic", "Hello _world_!\n", 18000),
    ("heading", "# _Hello_\n __world__!\n", 9000),
    ("nested", "This __text _contains_ nested__ markdown\n", 10000),
    ("inversed_nesting", "This is _an example __of inversed__ nested_ markdown\n", 8000),
    ("digits", "Text_12_3\n", 15000),
    ("digits_in_bold", "Text __that_12_3__ is in bold\n", 10000),
    ("word_start", "_begin_ning\n", 20000),
    ("word_end", "end_ing_\n", 20000),
    ("word_middle", "mi__ddl__e\n", 15000),
    ("cross_word", "This sh_ould not cha_nge\n", 10000),
    ("cross_word_nested", "This sh__o_uld_ wo__rk like this\n", 9000),
    ("unpaired_open", "__Unpaired_ markdown\n", 20000),
    ("unpaired_close", "Another _unpaired markdown__\n", 18000),
    ("intersecting", "Intersecting _markdown __should_ work__ like this\n", 10000),
    ("empty_markup", "This should ____ remain the same\n", 15000),
    ("escaped", r"This should \_not turn\_ into tags", 20000),
    ("escape_literal", r"This should \remain the\ same", 20000),
];

#[allow(dead_code)]
pub fn repeat_fixture(phrase: &str, copies: usize) -> String {
    phrase.repeat(copies)
}

/// A single line with no newlines, so every node shares one parent.
#[allow(dead_code)]
pub fn generate_single_line(copies: usize) -> String {
    "_Hello_ world_12. Hel_lo world_".repeat(copies)
}
