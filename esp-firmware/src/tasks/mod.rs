// Task-Modul: Enthält alle Embassy Tasks
//
// Alles läuft kooperativ auf einem Executor; die Tasks teilen sich den
// AppContext über embassy-sync Mutexe (kein Preemption, keine Locks im
// klassischen Sinn nötig, aber die Mutexe machen das Sharing explizit).

pub mod http;
pub mod sampling;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use http::http_server_task;
pub use sampling::{sample_sensors, sampling_loop};
pub use wifi::{connection_task, net_task, wait_for_network};
