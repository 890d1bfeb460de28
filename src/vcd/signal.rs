// Copyright (C) 2022 Yehowshua Immanuel
// This program is distributed under both the GPLV3 license
// and the YEHOWSHUA license, both of which can be found at
// the root of the folder containing the sources for this program.
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalType {
    Event,
    Integer,
    Parameter,
    Real,
    RealTime,
    Reg,
    Str,
    Supply0,
    Supply1,
    Time,
    Tri,
    TriAnd,
    TriOr,
    TriReg,
    Tri0,
    Tri1,
    WAnd,
    Wire,
    WOr,
    SVBit,
    SVLogic,
    SVInt,
    SVShortInt,
    SVLongInt,
    SVChar,
    SVShortReal,
}

impl FromStr for SignalType {
    type Err = String;

    fn from_str(word: &str) -> Result<Self, Self::Err> {
        match word {
            "event" => Ok(SignalType::Event),
            "integer" => Ok(SignalType::Integer),
            "parameter" => Ok(SignalType::Parameter),
            "real" => Ok(SignalType::Real),
            "realtime" => Ok(SignalType::RealTime),
            "reg" => Ok(SignalType::Reg),
            "string" => Ok(SignalType::Str),
            "supply0" => Ok(SignalType::Supply0),
            "supply1" => Ok(SignalType::Supply1),
            "time" => Ok(SignalType::Time),
            "tri" => Ok(SignalType::Tri),
            "triand" => Ok(SignalType::TriAnd),
            "trior" => Ok(SignalType::TriOr),
            "trireg" => Ok(SignalType::TriReg),
            "tri0" => Ok(SignalType::Tri0),
            "tri1" => Ok(SignalType::Tri1),
            "wand" => Ok(SignalType::WAnd),
            "wire" => Ok(SignalType::Wire),
            "wor" => Ok(SignalType::WOr),
            "bit" => Ok(SignalType::SVBit),
            "logic" => Ok(SignalType::SVLogic),
            "int" => Ok(SignalType::SVInt),
            "int_s" | "shortint" => Ok(SignalType::SVShortInt),
            "int_l" | "longint" => Ok(SignalType::SVLongInt),
            "byte" | "char" => Ok(SignalType::SVChar),
            "shortreal" => Ok(SignalType::SVShortReal),
            _ => Err(format!("`{word}` is not a known var type")),
        }
    }
}

/// One `$var` declaration. Fields are kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub signal_type: String,
    pub width: String,
    pub signal_id: String,
    pub name: String,
}

impl Signal {
    pub fn parsed_type(&self) -> Option<SignalType> {
        self.signal_type.parse().ok()
    }

    pub fn num_bits(&self) -> Option<u32> {
        self.width.parse().ok()
    }
}
