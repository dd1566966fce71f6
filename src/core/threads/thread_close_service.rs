// Thread-close policy - decides what /close does before Discord is touched.
//
// The Discord layer extracts the caller facts, asks for a decision and then
// applies it (notice embed first, archive second). Keeping the matrix here
// makes the staff/owner/refusal rules testable without a gateway connection.

/// Caller facts gathered from the invoking interaction.
#[derive(Debug, Clone, Copy)]
pub struct CloseRequest {
    pub is_thread: bool,
    pub can_manage_threads: bool,
    pub is_thread_owner: bool,
    pub lock_requested: bool,
}

/// Which notice is posted into the thread before archiving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseNotice {
    /// Staff archived and locked; readers must open a new thread.
    StaffLocked,
    /// Staff archived without locking; the thread can be reopened by posting.
    Staff,
    /// The person who opened the thread closed it themselves.
    Owner,
}

/// What the Discord layer should do with the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Archive { lock: bool, notice: CloseNotice },
    /// Ephemeral refusal: not invoked inside a thread.
    NotAThread,
    /// Ephemeral refusal: neither staff nor the thread opener.
    NotPermitted,
}

pub fn decide_close(request: CloseRequest) -> CloseDecision {
    if !request.is_thread {
        return CloseDecision::NotAThread;
    }

    if request.can_manage_threads {
        let notice = if request.lock_requested {
            CloseNotice::StaffLocked
        } else {
            CloseNotice::Staff
        };
        return CloseDecision::Archive {
            lock: request.lock_requested,
            notice,
        };
    }

    if request.is_thread_owner {
        // The opener may archive their own thread but never lock it, no
        // matter what they passed for the option.
        return CloseDecision::Archive {
            lock: false,
            notice: CloseNotice::Owner,
        };
    }

    CloseDecision::NotPermitted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CloseRequest {
        CloseRequest {
            is_thread: true,
            can_manage_threads: false,
            is_thread_owner: false,
            lock_requested: false,
        }
    }

    #[test]
    fn test_staff_with_lock_archives_locked() {
        let decision = decide_close(CloseRequest {
            can_manage_threads: true,
            lock_requested: true,
            ..request()
        });
        assert_eq!(
            decision,
            CloseDecision::Archive {
                lock: true,
                notice: CloseNotice::StaffLocked
            }
        );
    }

    #[test]
    fn test_staff_without_lock_archives_unlocked() {
        let decision = decide_close(CloseRequest {
            can_manage_threads: true,
            ..request()
        });
        assert_eq!(
            decision,
            CloseDecision::Archive {
                lock: false,
                notice: CloseNotice::Staff
            }
        );
    }

    #[test]
    fn test_owner_archives_unlocked_even_when_lock_requested() {
        let decision = decide_close(CloseRequest {
            is_thread_owner: true,
            lock_requested: true,
            ..request()
        });
        assert_eq!(
            decision,
            CloseDecision::Archive {
                lock: false,
                notice: CloseNotice::Owner
            }
        );
    }

    #[test]
    fn test_staff_branch_wins_over_ownership() {
        // A staff member closing their own thread still gets the staff
        // notice and may lock.
        let decision = decide_close(CloseRequest {
            can_manage_threads: true,
            is_thread_owner: true,
            lock_requested: true,
            ..request()
        });
        assert_eq!(
            decision,
            CloseDecision::Archive {
                lock: true,
                notice: CloseNotice::StaffLocked
            }
        );
    }

    #[test]
    fn test_bystander_is_refused() {
        assert_eq!(decide_close(request()), CloseDecision::NotPermitted);
    }

    #[test]
    fn test_outside_a_thread_is_refused_first() {
        let decision = decide_close(CloseRequest {
            is_thread: false,
            can_manage_threads: true,
            ..request()
        });
        assert_eq!(decision, CloseDecision::NotAThread);
    }
}
