use crate::sequence::prelude::*;

#[test]
fn bincode_standard() -> anyhow::Result<()> {
    let sequence = Sequence::from(vec![1_i64, -2, 3, i64::MAX]);

    let bytes = sequence.bincode(&BincodeConfiguration::Standard)?;
    let decoded = Sequence::<i64>::from_bincode(&bytes, &BincodeConfiguration::Standard)?;

    assert_eq!(decoded, sequence);
    Ok(())
}

#[test]
fn bincode_legacy() -> anyhow::Result<()> {
    let sequence = Sequence::from(vec!["alpha".to_string(), "beta".to_string()]);

    let bytes = sequence.bincode(&BincodeConfiguration::Legacy)?;
    let decoded = Sequence::<String>::from_bincode(&bytes, &BincodeConfiguration::Legacy)?;

    assert_eq!(decoded, sequence);
    Ok(())
}

#[test]
fn bincode_rejects_garbage() {
    let bytes = vec![0xff, 0xff, 0xff];
    assert!(Sequence::<String>::from_bincode(&bytes, &BincodeConfiguration::Standard).is_err());
}

#[test]
fn json() -> anyhow::Result<()> {
    let sequence = Sequence::from(vec![1, 2, 3]);
    assert_eq!(sequence.json()?, "[1,2,3]");

    let decoded = Sequence::<i32>::from_json("[4, 5]")?;
    assert_eq!(decoded, [4, 5]);

    assert!(Sequence::<i32>::from_json("{\"a\": 1}").is_err());
    Ok(())
}

#[test]
fn serde_is_transparent() -> anyhow::Result<()> {
    let sequence = Sequence::from(vec![true, false]);
    assert_eq!(serde_json::to_string(&sequence)?, "[true,false]");

    let decoded: Sequence<bool> = serde_json::from_str("[false]")?;
    assert_eq!(decoded, [false]);
    Ok(())
}
