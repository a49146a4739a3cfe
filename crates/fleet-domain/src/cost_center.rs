//! Department cost-center codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::choice::UnknownChoice;

/// Department cost center an employee is booked against.
///
/// Wire format: the integer accounting code (e.g. `7700`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum CostCenter {
    IndirectProduction = 2000,
    Maintenance = 2100,
    ProductionSupervision = 2200,
    ChiefWelder = 2210,
    InternalTraining = 2230,
    ToolRoom = 3300,
    InternalAudit = 4000,
    CommercialDirector = 5100,
    Quotation = 5110,
    Sales = 5120,
    Purchasing = 5200,
    Marketing = 5300,
    MaterialsLogistics = 5400,
    ProductionDirector = 6100,
    Production = 6110,
    ProductionPreparation = 6120,
    ProductionExecution = 6130,
    PlanningDigitalization = 6200,
    Engineering = 6300,
    Assembly = 6410,
    Laboratory = 6500,
    QualityControl = 6510,
    QualityAssuranceSafety = 6520,
    Investment = 6600,
    DeputyTechnologyDirector = 6700,
    SupervisoryBoard = 7000,
    ManagementBoard = 7100,
    BoardOffice = 7110,
    BoardAdvisors = 7120,
    LegalServices = 7300,
    Contracts = 7310,
    FinanceAccounting = 7400,
    Controlling = 7510,
    Administration = 7600,
    InformationTechnology = 7700,
    PayrollHr = 7800,
}

impl CostCenter {
    pub const KIND: &'static str = "cost center";

    pub const ALL: &'static [Self] = &[
        Self::IndirectProduction,
        Self::Maintenance,
        Self::ProductionSupervision,
        Self::ChiefWelder,
        Self::InternalTraining,
        Self::ToolRoom,
        Self::InternalAudit,
        Self::CommercialDirector,
        Self::Quotation,
        Self::Sales,
        Self::Purchasing,
        Self::Marketing,
        Self::MaterialsLogistics,
        Self::ProductionDirector,
        Self::Production,
        Self::ProductionPreparation,
        Self::ProductionExecution,
        Self::PlanningDigitalization,
        Self::Engineering,
        Self::Assembly,
        Self::Laboratory,
        Self::QualityControl,
        Self::QualityAssuranceSafety,
        Self::Investment,
        Self::DeputyTechnologyDirector,
        Self::SupervisoryBoard,
        Self::ManagementBoard,
        Self::BoardOffice,
        Self::BoardAdvisors,
        Self::LegalServices,
        Self::Contracts,
        Self::FinanceAccounting,
        Self::Controlling,
        Self::Administration,
        Self::InformationTechnology,
        Self::PayrollHr,
    ];

    /// Convert from the integer accounting code. Returns `None` for unknown codes.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// Integer accounting code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Department label as printed on cost reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::IndirectProduction => "2000- KOSZTY POŚREDNIE PRODUKCJI",
            Self::Maintenance => "2100- KOSZTY UTRZYMANIA RUCHU",
            Self::ProductionSupervision => "2200-KOSZTY NADZORU PRODUKCYJNEGO",
            Self::ChiefWelder => "2210-KOSZTY GŁÓWNEGO SPAWALNIKA",
            Self::InternalTraining => "2230-KOSZTY WŁASNYCH SZKOLEŃ I PRAKTYK",
            Self::ToolRoom => "3300-KOSZTY NARZĘDZIOWNI",
            Self::InternalAudit => "4000-KOSZTY DZIAŁU KONTROLI WEWNĘTRZNEJ",
            Self::CommercialDirector => "5100-DYREKTOR DS.HANDLOWYCH",
            Self::Quotation => "5110-KOSZTY DZIAŁU OFERTOWEGO",
            Self::Sales => "5120-KOSZTY DZIAŁU HANDLOWEGO",
            Self::Purchasing => "5200-KOSZTY DZIAŁU ZAKUPOW",
            Self::Marketing => "5300-KOSZTY DZIALU MARKETINGU",
            Self::MaterialsLogistics => "5400-KOSZTY GOSPOD.MATER., LOGISTYKI I SPEDYCJI",
            Self::ProductionDirector => "6100-DYREKTOR DS. PRODUKCJI, DS. PRZYGOT.I REALIZ.PRODU",
            Self::Production => "6110-KOSZTY DZIAŁU PRODUKCJI",
            Self::ProductionPreparation => "6120-KOSZTY DZIAŁU PRZYGOTOWANIA",
            Self::ProductionExecution => "6130-KOSZTY DZIAŁU REALIZACJI",
            Self::PlanningDigitalization => "6200-KOSZTY DZIAŁU PLANOWANIA I CYFRYZACJI",
            Self::Engineering => "6300-KOSZTY DZIAŁU TECHNICZNEGO",
            Self::Assembly => "6410-KOSZTY DZIALU MONTAZOWEGO",
            Self::Laboratory => "6500-KOSZTY LABORATORIUM",
            Self::QualityControl => "6510-KOSZTY DZIAŁU KONTROLI JAKOŚCI",
            Self::QualityAssuranceSafety => "6520-KOSZTY DZIALU ZAPEWN.JAKOŚCI, BHP I OCHRONY ś",
            Self::Investment => "6600-KOSZTY DZIAŁU INWESTYCJI",
            Self::DeputyTechnologyDirector => "6700-KOSZTY Z-CY DYREKTORA DS. TECHNOLOGII",
            Self::SupervisoryBoard => "7000-KOSZTY RADY NADZORCZEJ",
            Self::ManagementBoard => "7100-KOSZTY ZARZĄDU",
            Self::BoardOffice => "7110-KOSZTY BIURA ZARZĄDU",
            Self::BoardAdvisors => "7120-KOSZTY DORADCÓW ZARZADU",
            Self::LegalServices => "7300-KOSZTY OBSŁUGI PRAWNEJ",
            Self::Contracts => "7310-KOSZTY DZIAŁU UMÓW",
            Self::FinanceAccounting => "7400-KOSZTY DZIAŁU FINANSOWO - KSIĘGOWEGO",
            Self::Controlling => "7510-KOSZTY DZIAŁU KONTROLINGU",
            Self::Administration => "7600-KOSZTY WYDZIAłU ADMINISTRACYJNEGO",
            Self::InformationTechnology => "7700-KOSZTY DZIAŁU INFORMATYKI",
            Self::PayrollHr => "7800-KOSZTY DZIAŁU PŁAC I ZZL",
        }
    }
}

impl TryFrom<i32> for CostCenter {
    type Error = UnknownChoice;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| UnknownChoice::new(Self::KIND, code.to_string()))
    }
}

impl From<CostCenter> for i32 {
    fn from(center: CostCenter) -> Self {
        center.code()
    }
}

impl fmt::Display for CostCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.code().fmt(f)
    }
}
