//! Design package tiers.
//!
//! A package is both a sellable service tier on the marketing side and
//! the key under which a project's files are grouped on the dashboard
//! side.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four service tiers the studio offers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DesignPackage {
    GoodPlus,
    BetterPlus,
    QuadPlus,
    LuxuryPlus,
}

impl DesignPackage {
    pub const ALL: [DesignPackage; 4] = [
        DesignPackage::GoodPlus,
        DesignPackage::BetterPlus,
        DesignPackage::QuadPlus,
        DesignPackage::LuxuryPlus,
    ];

    /// Kebab-case identifier, used as the file-collection key.
    pub fn id(&self) -> &'static str {
        match self {
            DesignPackage::GoodPlus => "good-plus",
            DesignPackage::BetterPlus => "better-plus",
            DesignPackage::QuadPlus => "quad-plus",
            DesignPackage::LuxuryPlus => "luxury-plus",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            DesignPackage::GoodPlus => "Good Plus",
            DesignPackage::BetterPlus => "Better Plus",
            DesignPackage::QuadPlus => "Quad Plus",
            DesignPackage::LuxuryPlus => "Luxury Plus",
        }
    }

    /// Accepts the id ("quad-plus") or the display name in any casing
    /// ("Quad Plus", "Quad-Plus" as it arrives in a query string).
    pub fn parse(value: &str) -> Option<DesignPackage> {
        let key = value.trim().to_lowercase().replace([' ', '_'], "-");
        DesignPackage::ALL.into_iter().find(|p| p.id() == key)
    }

    /// Catalog entry for this tier.
    pub fn info(&self) -> &'static PackageInfo {
        &CATALOG[*self as usize]
    }
}

impl fmt::Display for DesignPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Marketing-facing description of one tier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub package: DesignPackage,
    pub tagline: &'static str,
    pub price: &'static str,
    pub timeline: &'static str,
    pub features: &'static [&'static str],
}

static CATALOG: [PackageInfo; 4] = [
    PackageInfo {
        package: DesignPackage::GoodPlus,
        tagline: "Perfect for starter homes",
        price: "Rs.29 - Rs.69/sq.ft",
        timeline: "1-2 weeks",
        features: &[
            "Basic architectural design",
            "2D floor plans",
            "Standard material selection",
            "Email support",
            "1 revision round",
        ],
    },
    PackageInfo {
        package: DesignPackage::BetterPlus,
        tagline: "Enhanced design experience",
        price: "Rs.99 - Rs.129/sq.ft",
        timeline: "2-4 weeks",
        features: &[
            "Enhanced architectural design",
            "3D Interior & Exterior renderings",
            "Premium material selection",
            "Priority support",
            "2 revision rounds",
            "Basic structural consultation",
        ],
    },
    PackageInfo {
        package: DesignPackage::QuadPlus,
        tagline: "Our most popular package",
        price: "Rs.129 - Rs.149/sq.ft",
        timeline: "3-6 weeks",
        features: &[
            "Premium architectural design",
            "Full 3D/VR experience",
            "3D Interior & Exterior renderings",
            "Luxury material selection",
            "Dedicated architect",
            "Unlimited revisions",
            "Full structural consultation",
            "MEP integration",
            "Project Management",
        ],
    },
    PackageInfo {
        package: DesignPackage::LuxuryPlus,
        tagline: "The ultimate design experience",
        price: "Rs.129+",
        timeline: "6-8 weeks",
        features: &[
            "Custom luxury design",
            "Full 3D/4D/VR experience",
            "Bespoke material sourcing",
            "Team of architects",
            "Unlimited revisions",
            "Full structural & MEP integration",
            "Project management",
            "Construction supervision",
            "Smart home integration",
        ],
    },
];

/// The full tier catalog, in ascending-price order.
pub fn catalog() -> &'static [PackageInfo] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_id_and_name() {
        assert_eq!(DesignPackage::parse("quad-plus"), Some(DesignPackage::QuadPlus));
        assert_eq!(DesignPackage::parse("Quad Plus"), Some(DesignPackage::QuadPlus));
        assert_eq!(DesignPackage::parse("Quad-Plus"), Some(DesignPackage::QuadPlus));
        assert_eq!(DesignPackage::parse("deluxe"), None);
    }

    #[test]
    fn test_serde_form_matches_id() {
        for package in DesignPackage::ALL {
            let json = serde_json::to_string(&package).expect("serialize");
            assert_eq!(json, format!("\"{}\"", package.id()));
        }
    }

    #[test]
    fn test_catalog_covers_all_tiers_in_order() {
        let tiers: Vec<_> = catalog().iter().map(|info| info.package).collect();
        assert_eq!(tiers, DesignPackage::ALL.to_vec());
        for info in catalog() {
            assert!(!info.features.is_empty());
        }
    }
}
