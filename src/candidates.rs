/// Common API endpoint guesses, probed in order. The order is significant:
/// the artifact on disk ends up holding the payload of the last candidate
/// that decoded as JSON.
pub const CANDIDATE_URLS: &[&str] = &[
    "https://desci.world/api/projects",
    "https://desci.world/api/v1/projects",
    "https://desci.world/projects.json",
    "https://desci.world/projects?format=json",
    "https://desci.world/_next/data/projects.json", // Next.js data route
];

/// Name of the artifact file written to the working directory.
pub const ARTIFACT_FILE: &str = "api_response.json";
