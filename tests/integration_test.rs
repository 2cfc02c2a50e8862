use std::error;
use std::fs::File;
use std::io::Read;
use std::process::Command;
use std::result;

type Error = Box<dyn error::Error>;
type Result<T> = result::Result<T, Error>;

/// Gets the golden stdout file given the category and test
fn expected_output(category: &str, test: &str) -> Result<Vec<u8>> {
    let output_base = "tests/output";
    let mut f = File::open(format!("{}/{}/{}.stdout", output_base, category, test))?;

    let mut buffer = Vec::new();
    f.read_to_end(&mut buffer)?;

    Ok(buffer)
}

fn cmd(args: &[&str]) -> Result<Vec<u8>> {
    let output = Command::new("./target/debug/rjs").args(args).output()?;

    Ok(output.stdout)
}

fn assert_topic(topic: &str) -> Result<()> {
    let actual = cmd(&[topic])?;
    let expected = expected_output("topics", topic)?;

    assert_eq!(actual, expected);
    Ok(())
}

#[test]
fn rjs_topic_primitives() -> Result<()> {
    assert_topic("primitives")
}

#[test]
fn rjs_topic_variables() -> Result<()> {
    assert_topic("variables")
}

#[test]
fn rjs_topic_truthiness() -> Result<()> {
    assert_topic("truthiness")
}

#[test]
fn rjs_topic_control_flow() -> Result<()> {
    assert_topic("control-flow")
}

#[test]
fn rjs_topic_functions() -> Result<()> {
    assert_topic("functions")
}

#[test]
fn rjs_topic_higher_order() -> Result<()> {
    assert_topic("higher-order")
}

#[test]
fn rjs_topic_objects() -> Result<()> {
    assert_topic("objects")
}

#[test]
fn rjs_topic_computed_keys() -> Result<()> {
    assert_topic("computed-keys")
}

#[test]
fn rjs_topic_descriptors() -> Result<()> {
    assert_topic("descriptors")
}

#[test]
fn rjs_topic_enumeration() -> Result<()> {
    assert_topic("enumeration")
}

#[test]
fn rjs_topic_constructors() -> Result<()> {
    assert_topic("constructors")
}

#[test]
fn rjs_topic_prototypes() -> Result<()> {
    assert_topic("prototypes")
}

#[test]
fn rjs_topic_closures() -> Result<()> {
    assert_topic("closures")
}

#[test]
fn rjs_notebook_all() -> Result<()> {
    let actual = cmd(&[])?;
    let expected = expected_output("notebook", "all")?;

    assert_eq!(actual, expected);
    Ok(())
}

#[test]
fn rjs_notebook_rejects_unknown_topics() -> Result<()> {
    let stdout = cmd(&["promises"])?;

    assert!(stdout.is_empty());
    Ok(())
}
