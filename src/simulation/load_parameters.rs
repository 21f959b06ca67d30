// src/simulation/load_parameters.rs

use std::error::Error;
use std::fs::File;
use serde_yaml::from_reader;

use crate::config::{parameters::Parameters, scenario::Scenario};

/// 物理・数値パラメータの読み込み
pub fn load_parameters(path: &str) -> Result<Parameters, Box<dyn Error>> {
    let file = File::open(path)?;
    let params: Parameters = from_reader(file)?;
    Ok(params)
}

/// シナリオの読み込み
pub fn load_scenario(path: &str) -> Result<Scenario, Box<dyn Error>> {
    let file = File::open(path)?;
    let scenario: Scenario = from_reader(file)?;
    Ok(scenario)
}
