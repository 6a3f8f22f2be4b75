//! Fixed 64-point Gauss-Legendre quadrature table.
//!
//! Abscissae and weights over [-1, 1]; callers rescale to their parameter
//! domain. Process-wide read-only constants, initialized at compile time.

/// Sample positions for 64-point Gauss-Legendre quadrature on [-1, 1].
pub(crate) const ABSCISSAE: [f64; 64] = [
    -0.024350292663424433,
    0.024350292663424433,
    -0.07299312178779904,
    0.07299312178779904,
    -0.12146281929612056,
    0.12146281929612056,
    -0.16964442042399283,
    0.16964442042399283,
    -0.21742364374000708,
    0.21742364374000708,
    -0.2646871622087674,
    0.2646871622087674,
    -0.31132287199021097,
    0.31132287199021097,
    -0.3572201583376681,
    0.3572201583376681,
    -0.4022701579639916,
    0.4022701579639916,
    -0.4463660172534641,
    0.4463660172534641,
    -0.48940314570705296,
    0.48940314570705296,
    -0.5312794640198946,
    0.5312794640198946,
    -0.571895646202634,
    0.571895646202634,
    -0.6111553551723933,
    0.6111553551723933,
    -0.6489654712546573,
    0.6489654712546573,
    -0.6852363130542333,
    0.6852363130542333,
    -0.7198818501716109,
    0.7198818501716109,
    -0.7528199072605319,
    0.7528199072605319,
    -0.7839723589433414,
    0.7839723589433414,
    -0.8132653151227975,
    0.8132653151227975,
    -0.8406292962525803,
    0.8406292962525803,
    -0.8659993981540928,
    0.8659993981540928,
    -0.8893154459951141,
    0.8893154459951141,
    -0.9105221370785028,
    0.9105221370785028,
    -0.9295691721319396,
    0.9295691721319396,
    -0.9464113748584028,
    0.9464113748584028,
    -0.9610087996520538,
    0.9610087996520538,
    -0.973326827789911,
    0.973326827789911,
    -0.983336253884626,
    0.983336253884626,
    -0.9910133714767443,
    0.9910133714767443,
    -0.9963401167719553,
    0.9963401167719553,
    -0.9993050417357722,
    0.9993050417357722,
];

/// Quadrature weights paired with [`ABSCISSAE`].
pub(crate) const WEIGHTS: [f64; 64] = [
    0.048690957009139724,
    0.048690957009139724,
    0.04857546744150343,
    0.04857546744150343,
    0.048344762234802954,
    0.048344762234802954,
    0.04799938859645831,
    0.04799938859645831,
    0.04754016571483031,
    0.04754016571483031,
    0.04696818281621002,
    0.04696818281621002,
    0.046284796581314416,
    0.046284796581314416,
    0.04549162792741814,
    0.04549162792741814,
    0.044590558163756566,
    0.044590558163756566,
    0.04358372452932345,
    0.04358372452932345,
    0.04247351512365359,
    0.04247351512365359,
    0.04126256324262353,
    0.04126256324262353,
    0.03995374113272034,
    0.03995374113272034,
    0.038550153178615626,
    0.038550153178615626,
    0.03705512854024005,
    0.03705512854024005,
    0.035472213256882386,
    0.035472213256882386,
    0.033805161837141606,
    0.033805161837141606,
    0.03205792835485155,
    0.03205792835485155,
    0.030234657072402478,
    0.030234657072402478,
    0.028339672614259483,
    0.028339672614259483,
    0.02637746971505466,
    0.02637746971505466,
    0.024352702568710874,
    0.024352702568710874,
    0.022270173808383253,
    0.022270173808383253,
    0.02013482315353021,
    0.02013482315353021,
    0.017951715775697343,
    0.017951715775697343,
    0.015726030476024718,
    0.015726030476024718,
    0.013463047896718643,
    0.013463047896718643,
    0.011168139460131128,
    0.011168139460131128,
    0.008846759826363947,
    0.008846759826363947,
    0.006504457968978363,
    0.006504457968978363,
    0.004147033260562468,
    0.004147033260562468,
    0.001783280721696433,
    0.001783280721696433,
];
