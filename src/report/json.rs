use anyhow::Result;

use super::AssessmentReport;

/// Serialize the report as pretty-printed JSON.
pub fn to_json(report: &AssessmentReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Print the report as JSON on stdout.
pub fn render(report: &AssessmentReport) -> Result<()> {
    println!("{}", to_json(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assessment, SmokingCategory, SystemicRisk};
    use crate::risk::assess;

    #[test]
    fn test_json_shape() {
        let inputs = Assessment {
            bop: 10.0,
            residual_pockets: 4.0,
            teeth_lost: 4.0,
            bone_loss_age: 0.5,
            systemic: SystemicRisk::Present,
            smoking: SmokingCategory::NonSmoker,
        };
        let report = AssessmentReport::new(&inputs, &assess(&inputs));
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();

        assert_eq!(value["verdict"], "Moderate Risk");
        assert_eq!(value["counts"]["high"], 1);
        assert_eq!(value["counts"]["moderate"], 4);
        assert_eq!(value["inputs"]["smoking"], "Non-Smoker");
        assert_eq!(value["factors"][4]["level"], "High");
        assert_eq!(value["factors"][4]["score"], 3);
        assert_eq!(value["factors"][0]["thresholds"]["low_max"], 10.0);
        assert_eq!(value["chart"]["angles"].as_array().unwrap().len(), 7);
        assert_eq!(value["chart"]["labels"].as_array().unwrap().len(), 6);
    }
}
