use phf::phf_set;

/// 物理关键词
static PHYSICS_KEYWORDS: phf::Set<&'static str> = phf_set! {
    "force",
    "energy",
    "momentum",
    "acceleration",
    "gravitation",
    "magnetic",
    "electric field",
    "current",
    "voltage",
    "resistance",
    "capacitor",
    "inductor",
    "lens",
    "wavelength",
    "frequency",
    "photon",
    "oscillation",
    "pendulum",
    "friction",
    "torque",
    "kinetic",
    "potential difference",
    "refractive",
    "interference",
    "diffraction",
    "semiconductor",
    "projectile",
    "thermodynamic",
    "newton",
};

/// 化学关键词
static CHEMISTRY_KEYWORDS: phf::Set<&'static str> = phf_set! {
    "mole",
    "molar",
    "reaction",
    "compound",
    "oxidation",
    "reduction",
    "electrolyte",
    "organic",
    "alkane",
    "alkene",
    "benzene",
    "catalyst",
    "isomer",
    "hybridi",
    "ionic",
    "enthalpy",
    "entropy",
    "salt",
    "periodic table",
    "valence",
    "orbital",
    "titration",
    "acid",
    "covalent",
    "aqueous",
};

/// 数学关键词
static MATHEMATICS_KEYWORDS: phf::Set<&'static str> = phf_set! {
    "integral",
    "derivative",
    "differentiable",
    "matrix",
    "determinant",
    "equation",
    "polynomial",
    "probability",
    "function",
    "limit",
    "parabola",
    "ellipse",
    "hyperbola",
    "vector",
    "sequence",
    "series",
    "triangle",
    "circle",
    "logarithm",
    "permutation",
    "binomial",
    "locus",
    "coordinate",
    "quadratic",
    "trigonometric",
    "complex number",
};

/// 科目枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    /// 物理
    Physics,
    /// 化学
    Chemistry,
    /// 数学
    Mathematics,
}

impl Subject {
    /// 所有科目，顺序即并列时的比较顺序
    pub const ALL: [Subject; 3] = [Subject::Physics, Subject::Chemistry, Subject::Mathematics];

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Mathematics => "mathematics",
        }
    }

    /// 该科目的关键词表
    pub fn keywords(self) -> &'static phf::Set<&'static str> {
        match self {
            Subject::Physics => &PHYSICS_KEYWORDS,
            Subject::Chemistry => &CHEMISTRY_KEYWORDS,
            Subject::Mathematics => &MATHEMATICS_KEYWORDS,
        }
    }

    /// 从名称解析科目（支持常见缩写）
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "physics" | "phy" | "phys" => Some(Subject::Physics),
            "chemistry" | "chem" => Some(Subject::Chemistry),
            "mathematics" | "maths" | "math" => Some(Subject::Mathematics),
            _ => None,
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(Subject::from_name("Maths"), Some(Subject::Mathematics));
        assert_eq!(Subject::from_name(" chem "), Some(Subject::Chemistry));
        assert_eq!(Subject::from_name("biology"), None);
    }

    #[test]
    fn test_keyword_tables_are_disjoint() {
        for a in Subject::ALL {
            for b in Subject::ALL.iter().filter(|s| **s != a) {
                for kw in a.keywords().iter() {
                    assert!(!b.keywords().contains(kw), "{} 同时属于 {} 和 {}", kw, a, b);
                }
            }
        }
    }
}
