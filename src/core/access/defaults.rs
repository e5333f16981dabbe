//! Built-in per-role access tables
//!
//! One entry per role, one row per granted tab. Tabs a role cannot see are
//! simply absent; children and features carry explicit flags so a granted
//! tab still lists what is switched off inside it. Identifiers here must
//! match the route/feature ids the UI sends, including casing.

use crate::core::roles::RoleKey;

/// Declarative access for one tab within one role's table
#[derive(Debug, Clone, Copy)]
pub struct TabDefaults {
    /// Tab identifier as used by the UI router
    pub id: &'static str,
    /// Whether the role can open the tab at all
    pub access: bool,
    /// Child tab id → visibility
    pub children: &'static [(&'static str, bool)],
    /// Feature id → enablement
    pub features: &'static [(&'static str, bool)],
}

/// Declarative access table for one role
#[derive(Debug, Clone, Copy)]
pub struct RoleDefaults {
    /// The role this table applies to
    pub role: RoleKey,
    /// Granted tabs, in display order
    pub tabs: &'static [TabDefaults],
}

const ADMIN_TABS: &[TabDefaults] = &[
    TabDefaults {
        id: "dashboard",
        access: true,
        children: &[],
        features: &[],
    },
    TabDefaults {
        id: "manageInstitute",
        access: true,
        children: &[
            ("batches", true),
            ("session", true),
            ("levels", true),
            ("subjects", true),
        ],
        features: &[],
    },
    TabDefaults {
        id: "students",
        access: true,
        children: &[
            ("studentsList", true),
            ("enrollRequests", true),
            ("inviteLinks", true),
        ],
        features: &[("bulkUpload", true)],
    },
    TabDefaults {
        id: "studyLibrary",
        access: true,
        children: &[("courses", true), ("presentations", true)],
        features: &[("createCourse", true)],
    },
    TabDefaults {
        id: "assessmentCenter",
        access: true,
        children: &[
            ("assessmentList", true),
            ("questionPapers", true),
            ("evaluations", true),
        ],
        features: &[("createAssessment", true), ("evaluateSubmissions", true)],
    },
    TabDefaults {
        id: "liveSessions",
        access: true,
        children: &[("schedule", true), ("attendance", true)],
        features: &[("scheduleSession", true)],
    },
    TabDefaults {
        id: "aiCenter",
        access: true,
        children: &[],
        features: &[("generateQuestions", true)],
    },
    TabDefaults {
        id: "communityCentre",
        access: true,
        children: &[],
        features: &[],
    },
    TabDefaults {
        id: "settings",
        access: true,
        children: &[],
        features: &[("manageNaming", true), ("manageTabs", true)],
    },
];

const TEACHER_TABS: &[TabDefaults] = &[
    TabDefaults {
        id: "dashboard",
        access: true,
        children: &[],
        features: &[],
    },
    TabDefaults {
        id: "manageInstitute",
        access: true,
        children: &[
            ("batches", true),
            ("session", false),
            ("levels", true),
            ("subjects", true),
        ],
        features: &[],
    },
    TabDefaults {
        id: "students",
        access: true,
        children: &[
            ("studentsList", true),
            ("enrollRequests", true),
            ("inviteLinks", false),
        ],
        features: &[("bulkUpload", false)],
    },
    TabDefaults {
        id: "studyLibrary",
        access: true,
        children: &[("courses", true), ("presentations", true)],
        features: &[("createCourse", true)],
    },
    TabDefaults {
        id: "assessmentCenter",
        access: true,
        children: &[
            ("assessmentList", true),
            ("questionPapers", true),
            ("evaluations", false),
        ],
        features: &[("createAssessment", true), ("evaluateSubmissions", false)],
    },
    TabDefaults {
        id: "liveSessions",
        access: true,
        children: &[("schedule", true), ("attendance", true)],
        features: &[("scheduleSession", true)],
    },
    TabDefaults {
        id: "aiCenter",
        access: true,
        children: &[],
        features: &[("generateQuestions", true)],
    },
];

const COURSE_CREATOR_TABS: &[TabDefaults] = &[
    TabDefaults {
        id: "dashboard",
        access: true,
        children: &[],
        features: &[],
    },
    TabDefaults {
        id: "studyLibrary",
        access: true,
        children: &[("courses", true), ("presentations", true)],
        features: &[("createCourse", true)],
    },
    TabDefaults {
        id: "aiCenter",
        access: true,
        children: &[],
        features: &[("generateQuestions", true)],
    },
];

const ASSESSMENT_CREATOR_TABS: &[TabDefaults] = &[
    TabDefaults {
        id: "dashboard",
        access: true,
        children: &[],
        features: &[],
    },
    TabDefaults {
        id: "assessmentCenter",
        access: true,
        children: &[
            ("assessmentList", true),
            ("questionPapers", true),
            ("evaluations", false),
        ],
        features: &[("createAssessment", true), ("evaluateSubmissions", false)],
    },
    TabDefaults {
        id: "aiCenter",
        access: true,
        children: &[],
        features: &[("generateQuestions", true)],
    },
];

const EVALUATOR_TABS: &[TabDefaults] = &[
    TabDefaults {
        id: "dashboard",
        access: true,
        children: &[],
        features: &[],
    },
    TabDefaults {
        id: "assessmentCenter",
        access: true,
        children: &[
            ("assessmentList", true),
            ("questionPapers", false),
            ("evaluations", true),
        ],
        features: &[("createAssessment", false), ("evaluateSubmissions", true)],
    },
];

const STUDENT_TABS: &[TabDefaults] = &[
    TabDefaults {
        id: "dashboard",
        access: true,
        children: &[],
        features: &[],
    },
    TabDefaults {
        id: "studyLibrary",
        access: true,
        children: &[("courses", true), ("presentations", false)],
        features: &[("createCourse", false)],
    },
    TabDefaults {
        id: "assessmentCenter",
        access: true,
        children: &[
            ("assessmentList", true),
            ("questionPapers", false),
            ("evaluations", false),
        ],
        features: &[("createAssessment", false), ("evaluateSubmissions", false)],
    },
    TabDefaults {
        id: "liveSessions",
        access: true,
        children: &[("schedule", true), ("attendance", false)],
        features: &[("scheduleSession", false)],
    },
];

/// The complete built-in matrix, one table per known role
pub const ROLE_DEFAULTS: &[RoleDefaults] = &[
    RoleDefaults {
        role: RoleKey::Admin,
        tabs: ADMIN_TABS,
    },
    RoleDefaults {
        role: RoleKey::Teacher,
        tabs: TEACHER_TABS,
    },
    RoleDefaults {
        role: RoleKey::CourseCreator,
        tabs: COURSE_CREATOR_TABS,
    },
    RoleDefaults {
        role: RoleKey::AssessmentCreator,
        tabs: ASSESSMENT_CREATOR_TABS,
    },
    RoleDefaults {
        role: RoleKey::Evaluator,
        tabs: EVALUATOR_TABS,
    },
    RoleDefaults {
        role: RoleKey::Student,
        tabs: STUDENT_TABS,
    },
];
